//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use std::path::{Path, PathBuf};

use courtside_config::Config;
use courtside_core::{Dataset, QueryEngine};
use tracing::info;

mod ask;
mod chat;
mod info;
mod init;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use chat::ChatStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Shared input for commands that only need the config and the dataset override.
pub type DataInput = (Config, Option<PathBuf>);

/// Resolve the dataset path and load it into a query engine.
///
/// A dataset that fails to load does not fail the command; the engine answers
/// in degraded mode instead.
fn load_engine(config: &Config, data: Option<&Path>) -> anyhow::Result<QueryEngine> {
    let path = config.data_path(data)?;
    info!("Data path: {}", path.display());
    Ok(QueryEngine::new(Dataset::load(&path)))
}

/// Contract shared by all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

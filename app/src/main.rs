#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use command::{
    AskInput, AskStrategy, ChatStrategy, CommandStrategy, InfoStrategy, InitStrategy,
    VersionStrategy,
};
use courtside_config::{Config, LogConfig};
use courtside_core::query::EXAMPLE_QUESTION;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "courtside")]
#[command(about = "Ask whether an NBA player is currently active", long_about = None)]
struct Cli {
    /// Path to the player CSV (defaults to data/player.csv next to the executable)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask questions interactively (default)
    Chat,
    /// Answer a single question and exit
    #[command(after_help = format!("Example: courtside ask \"{EXAMPLE_QUESTION}\""))]
    Ask {
        /// Question naming a player as `player <first> <last>`
        question: String,
    },
    /// Show resolved paths and a summary of the dataset
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    let level = config
        .as_ref()
        .map_or_else(|_| LogConfig::default().level, |c| c.log.level.clone());
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let data = cli.data;
    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => ChatStrategy.execute((loaded(config)?, data)),
        Commands::Ask { question } => AskStrategy.execute(AskInput {
            config: loaded(config)?,
            data,
            question,
        }),
        Commands::Info => InfoStrategy.execute((loaded(config)?, data)),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}

/// Surface a config error only for commands that read the config.
fn loaded(config: anyhow::Result<Config>) -> anyhow::Result<Config> {
    let config = config?;
    if let Some(source) = &config.source {
        info!("Loaded config from {}", source.display());
    }
    Ok(config)
}

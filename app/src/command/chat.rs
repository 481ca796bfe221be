//! Interactive question loop over stdin/stdout.

use super::DataInput;

/// Strategy for the interactive session.
///
/// Loads the dataset once, then answers one question per line until `quit`
/// or end of input.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = DataInput;

    fn execute(&self, (config, data): Self::Input) -> anyhow::Result<()> {
        let engine = super::load_engine(&config, data.as_deref())?;
        let stdin = std::io::stdin();
        engine.run_interactive(stdin.lock(), std::io::stdout().lock())?;
        Ok(())
    }
}

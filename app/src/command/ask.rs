use std::path::PathBuf;

use courtside_config::Config;

/// Input parameters for the Ask command strategy.
#[derive(Debug, Clone)]
pub struct AskInput {
    pub config: Config,
    /// Optional dataset path override
    pub data: Option<PathBuf>,
    /// The question to answer
    pub question: String,
}

/// Strategy for answering a single question without entering the loop.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let engine = super::load_engine(&input.config, input.data.as_deref())?;
        println!("{}", engine.answer(input.question.trim()));
        Ok(())
    }
}

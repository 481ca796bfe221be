use courtside_config::{Config, DEFAULT_DATA_PATH};
use courtside_core::query::EXAMPLE_QUESTION;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/courtside/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Put your roster at {DEFAULT_DATA_PATH} next to the courtside executable,");
        println!("      or add \"data\": {{ \"path\": \"...\" }} to the config file");
        println!("   2. Run 'courtside' and ask e.g. '{EXAMPLE_QUESTION}'");
        println!();
        Ok(())
    }
}

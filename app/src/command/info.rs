use courtside_config::Config;
use courtside_core::Dataset;

use super::DataInput;

/// Strategy for displaying where data comes from and what was loaded.
///
/// Outputs:
/// - Config file location and whether it exists
/// - Resolved dataset path
/// - Discovered columns and record counts, or the degraded-mode reason
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = DataInput;

    fn execute(&self, (config, data): Self::Input) -> anyhow::Result<()> {
        println!("=== courtside Configuration ===\n");

        let config_path = Config::config_path()?;
        println!("Config:");
        println!("  Path: {}", config_path.display());
        println!("  Exists: {}", config_path.exists());
        println!("  Log Level: {}", config.log.level);
        println!();

        let path = config.data_path(data.as_deref())?;
        println!("Dataset:");
        println!("  Path: {}", path.display());

        match Dataset::load(&path) {
            Dataset::Ready(table) => {
                let active = table.active_count();
                println!("  Status: Loaded");
                println!("  Columns: {}", table.columns().join(", "));
                println!("  Records: {}", table.len());
                println!("  Active: {active}");
                println!("  Inactive: {}", table.len() - active);
            }
            Dataset::Degraded(e) => {
                println!("  Status: Unavailable");
                println!("  Error: {e}");
            }
        }

        Ok(())
    }
}

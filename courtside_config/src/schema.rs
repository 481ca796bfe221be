use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dataset location relative to the executable when nothing overrides it.
pub const DEFAULT_DATA_PATH: &str = "data/player.csv";

/// Written by `init`. Leaves `data.path` unset so the default location applies.
const CONFIG_TEMPLATE: &str = r#"{
  "log": {
    "level": "info"
  }
}"#;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub log: LogConfig,
    /// File this config was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DataConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LogConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("courtside"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/courtside/config.json`, falling back to defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file at {}: {e}", path.display())
        })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Resolve the dataset path: explicit override, then config, then
    /// `data/player.csv` next to the running executable.
    pub fn data_path(&self, cli_override: Option<&Path>) -> anyhow::Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.data.path {
            return Ok(path.clone());
        }
        let exe = std::env::current_exe()?;
        let base = exe
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Cannot resolve executable directory"))?;
        Ok(base.join(DEFAULT_DATA_PATH))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::ensure_config_dir()?.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.data.path.is_none());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_parses_overrides() {
        let config: Config =
            serde_json::from_str(r#"{"data": {"path": "/srv/nba/player.csv"}, "log": {"level": "debug"}}"#)
                .unwrap();
        assert_eq!(config.data.path, Some(PathBuf::from("/srv/nba/player.csv")));
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_data_path_precedence() {
        let config = Config {
            data: DataConfig {
                path: Some(PathBuf::from("/from/config.csv")),
            },
            ..Config::default()
        };
        assert_eq!(
            config.data_path(Some(Path::new("/from/flag.csv"))).unwrap(),
            PathBuf::from("/from/flag.csv")
        );
        assert_eq!(
            config.data_path(None).unwrap(),
            PathBuf::from("/from/config.csv")
        );
    }

    #[test]
    fn test_default_data_path_is_next_to_executable() {
        let path = Config::default().data_path(None).unwrap();
        assert!(path.ends_with(DEFAULT_DATA_PATH));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("courtside-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{"log": {"level": "warn"}}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = std::env::temp_dir().join(format!("courtside-bad-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config file at"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_template_keeps_default_data_path() {
        let config: Config = serde_json::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.data.path.is_none());
        assert_eq!(config.log.level, "info");
        assert!(config.data_path(None).unwrap().ends_with(DEFAULT_DATA_PATH));
    }
}

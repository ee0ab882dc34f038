use std::path::{Path, PathBuf};

use thiserror::Error;

use super::schema::WaypickConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./waypick.yaml
    /// 2. ~/.waypick/config.yaml
    /// 3. Default configuration
    pub fn load_default() -> Result<WaypickConfig, ConfigError> {
        let local_config = PathBuf::from("./waypick.yaml");
        if local_config.exists() {
            return Self::load_from(&local_config);
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".waypick").join("config.yaml");
            if home_config.exists() {
                return Self::load_from(&home_config);
            }
        }

        Ok(WaypickConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<WaypickConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: WaypickConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

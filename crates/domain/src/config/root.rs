use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordDefaultsConfig;
use super::zone::ZoneConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-authority.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-authority/config.toml";

/// Main configuration structure for Ferrous Authority
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// TTL and priority applied to records that leave them unset
    #[serde(default)]
    pub records: RecordDefaultsConfig,

    /// Statically declared zone records
    #[serde(default)]
    pub zone: ZoneConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-authority.toml in current directory
    /// 3. /etc/ferrous-authority/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.logging.is_valid_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        for entry in &self.zone.records {
            entry
                .to_resource_record_with(&self.records)
                .map_err(|source| ConfigError::ZoneRecord {
                    name: entry.name.clone(),
                    source,
                })?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

use serde::{Deserialize, Serialize};

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of the human-readable format.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    pub fn is_valid_level(&self) -> bool {
        LEVELS.contains(&self.level.to_ascii_lowercase().as_str())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

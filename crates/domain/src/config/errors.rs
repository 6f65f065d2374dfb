use crate::DomainError;

/// Failures while loading, validating or saving `ferrous-authority.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {0}: {1}")]
    FileRead(String, String),

    #[error("Cannot write {0}: {1}")]
    FileWrite(String, String),

    #[error("Malformed configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Validation(String),

    #[error("Zone record '{name}' rejected: {source}")]
    ZoneRecord {
        name: String,
        #[source]
        source: DomainError,
    },
}

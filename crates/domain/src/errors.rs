use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("The root name has no wildcard form")]
    RootHasNoWildcardForm,

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("Unsupported record data for type {0}")]
    UnsupportedRecordData(String),

    #[error("Invalid record data: {0}")]
    InvalidRecordData(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

//! Ferrous Authority Domain Layer
pub mod config;
pub mod dns_name;
pub mod dns_record;
pub mod errors;
pub mod name_matcher;

pub use config::{
    Config, ConfigError, LoggingConfig, RecordDefaultsConfig, ZoneConfig, ZoneRecordEntry,
};
pub use dns_name::{DomainName, Label, WILDCARD_LABEL};
pub use dns_record::{
    clamp_ttl_to_soa_minimum, default_priority, default_ttl, root_hints, type_code_for,
    DnskeyData, MxData, OptData, RecordData, RecordType, ResourceRecord, RootHints, SoaData,
    CLASS_IN, DEFAULT_PRIORITY, DEFAULT_TTL, DNSKEY_FLAG_SECURE_ENTRY_POINT,
    DNSKEY_FLAG_ZONE_KEY, RECORD_TYPES, ROOT_A_TTL, ROOT_NS_TTL, ROOT_SERVERS,
};
pub use errors::DomainError;
pub use name_matcher::{
    names_equivalent, strip_leading_wildcards, wildcard_form, wildcard_substitute,
};

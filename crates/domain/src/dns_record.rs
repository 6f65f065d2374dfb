pub mod defaults;
pub mod record;
pub mod record_type;
pub mod root_hints;

pub use defaults::{
    clamp_ttl_to_soa_minimum, default_priority, default_ttl, DEFAULT_PRIORITY, DEFAULT_TTL,
};
pub use record::{
    DnskeyData, MxData, OptData, RecordData, ResourceRecord, SoaData, CLASS_IN,
    DNSKEY_FLAG_SECURE_ENTRY_POINT, DNSKEY_FLAG_ZONE_KEY,
};
pub use record_type::{type_code_for, RecordType, RECORD_TYPES};
pub use root_hints::{root_hints, RootHints, ROOT_A_TTL, ROOT_NS_TTL, ROOT_SERVERS};

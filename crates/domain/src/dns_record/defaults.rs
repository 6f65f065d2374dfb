use super::{RecordData, ResourceRecord};

pub const DEFAULT_TTL: u32 = 3600;

pub const DEFAULT_PRIORITY: u16 = 0;

pub fn default_ttl(ttl: Option<u32>) -> u32 {
    ttl.unwrap_or(DEFAULT_TTL)
}

pub fn default_priority(priority: Option<u16>) -> u16 {
    priority.unwrap_or(DEFAULT_PRIORITY)
}

/// Caps the record TTL at the SOA minimum when `data` is an SOA payload.
/// Any other payload leaves the record as it is.
pub fn clamp_ttl_to_soa_minimum(record: &ResourceRecord, data: &RecordData) -> ResourceRecord {
    match data {
        RecordData::Soa(soa) => record.with_ttl(soa.minimum.min(record.ttl)),
        _ => record.clone(),
    }
}

use super::records::RecordDefaultsConfig;
use crate::dns_record::{
    default_priority, default_ttl, type_code_for, MxData, RecordData, RecordType, ResourceRecord,
};
use crate::{DomainError, DomainName};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Longest single character-string a TXT record can carry.
const MAX_CHARACTER_STRING: usize = 255;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZoneConfig {
    #[serde(default)]
    pub records: Vec<ZoneRecordEntry>,
}

impl ZoneConfig {
    pub fn resource_records(
        &self,
        defaults: &RecordDefaultsConfig,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        self.records
            .iter()
            .map(|entry| entry.to_resource_record_with(defaults))
            .collect()
    }
}

/// A record declared in the configuration file.
///
/// ```toml
/// [[zone.records]]
/// name = "mail.example.com"
/// record_type = "MX"
/// value = "mx1.example.com"
/// priority = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZoneRecordEntry {
    pub name: String,

    pub record_type: String,

    pub value: String,

    #[serde(default)]
    pub ttl: Option<u32>,

    #[serde(default)]
    pub priority: Option<u16>,
}

impl ZoneRecordEntry {
    pub fn to_resource_record(&self) -> Result<ResourceRecord, DomainError> {
        self.build(default_ttl(self.ttl), default_priority(self.priority))
    }

    pub fn to_resource_record_with(
        &self,
        defaults: &RecordDefaultsConfig,
    ) -> Result<ResourceRecord, DomainError> {
        self.build(
            defaults.ttl_or_default(self.ttl),
            defaults.priority_or_default(self.priority),
        )
    }

    fn build(&self, ttl: u32, priority: u16) -> Result<ResourceRecord, DomainError> {
        let record_type = type_code_for(&self.record_type)
            .ok_or_else(|| DomainError::UnknownRecordType(self.record_type.clone()))?;
        let name: DomainName = self.name.parse()?;
        let data = self.parse_value(record_type, priority)?;

        Ok(ResourceRecord::new(name, record_type, ttl, data))
    }

    fn parse_value(
        &self,
        record_type: RecordType,
        priority: u16,
    ) -> Result<RecordData, DomainError> {
        let value = self.value.trim();
        let data = match record_type {
            RecordType::A => {
                RecordData::A(value.parse::<Ipv4Addr>().map_err(|e| self.invalid(e))?)
            }
            RecordType::AAAA => {
                RecordData::Aaaa(value.parse::<Ipv6Addr>().map_err(|e| self.invalid(e))?)
            }
            RecordType::NS => RecordData::Ns(value.parse()?),
            RecordType::CNAME => RecordData::Cname(value.parse()?),
            RecordType::PTR => RecordData::Ptr(value.parse()?),
            RecordType::MX => RecordData::Mx(MxData {
                preference: priority,
                exchange: value.parse()?,
            }),
            RecordType::TXT => RecordData::Txt(character_strings(value)),
            other => return Err(DomainError::UnsupportedRecordData(other.to_string())),
        };
        Ok(data)
    }

    fn invalid(&self, e: impl std::fmt::Display) -> DomainError {
        DomainError::InvalidRecordData(format!(
            "{} {} {:?}: {}",
            self.name, self.record_type, self.value, e
        ))
    }
}

/// Splits a TXT value into wire-sized character-strings. An empty value
/// still yields one empty string.
fn character_strings(value: &str) -> Vec<Vec<u8>> {
    if value.is_empty() {
        return vec![Vec::new()];
    }
    value
        .as_bytes()
        .chunks(MAX_CHARACTER_STRING)
        .map(<[u8]>::to_vec)
        .collect()
}

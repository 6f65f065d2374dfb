use super::RecordType;
use crate::DomainName;
use std::net::{Ipv4Addr, Ipv6Addr};

pub const CLASS_IN: u16 = 1;

/// DNSKEY flags with only the Zone Key bit set.
pub const DNSKEY_FLAG_ZONE_KEY: u16 = 256;

/// DNSKEY flags with the Zone Key and Secure Entry Point bits set.
pub const DNSKEY_FLAG_SECURE_ENTRY_POINT: u16 = 257;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoaData {
    pub mname: DomainName,
    pub rname: DomainName,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    /// Negative-caching TTL.
    pub minimum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MxData {
    pub preference: u16,
    pub exchange: DomainName,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnskeyData {
    pub flags: u16,
    pub protocol: u8,
    pub algorithm: u8,
    pub public_key: Vec<u8>,
}

impl DnskeyData {
    pub fn is_zone_key(&self) -> bool {
        self.flags & 0x0100 != 0
    }

    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & 0x0001 != 0
    }
}

/// EDNS pseudo-record payload. The codec keeps these apart from regular data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptData {
    pub udp_payload_size: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(DomainName),
    Cname(DomainName),
    Ptr(DomainName),
    Mx(MxData),
    Txt(Vec<Vec<u8>>),
    Soa(SoaData),
    Dnskey(DnskeyData),
    Opt(OptData),
    /// Wire-format rdata of a type this crate does not model.
    Opaque(Vec<u8>),
}

impl RecordData {
    /// The type code this payload shape belongs to, if it has one.
    pub fn natural_type(&self) -> Option<RecordType> {
        match self {
            RecordData::A(_) => Some(RecordType::A),
            RecordData::Aaaa(_) => Some(RecordType::AAAA),
            RecordData::Ns(_) => Some(RecordType::NS),
            RecordData::Cname(_) => Some(RecordType::CNAME),
            RecordData::Ptr(_) => Some(RecordType::PTR),
            RecordData::Mx(_) => Some(RecordType::MX),
            RecordData::Txt(_) => Some(RecordType::TXT),
            RecordData::Soa(_) => Some(RecordType::SOA),
            RecordData::Dnskey(_) => Some(RecordType::DNSKEY),
            RecordData::Opt(_) => Some(RecordType::OPT),
            RecordData::Opaque(_) => None,
        }
    }

    /// The domain name this payload points at (NS, CNAME, PTR and MX targets).
    pub fn target(&self) -> Option<&DomainName> {
        match self {
            RecordData::Ns(name) | RecordData::Cname(name) | RecordData::Ptr(name) => Some(name),
            RecordData::Mx(mx) => Some(&mx.exchange),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRecord {
    pub name: DomainName,

    pub record_type: RecordType,

    pub class: u16,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: DomainName, record_type: RecordType, ttl: u32, data: RecordData) -> Self {
        Self {
            name,
            record_type,
            class: CLASS_IN,
            ttl,
            data,
        }
    }

    /// Builds an IN-class record typed after its payload. `Opaque` payloads
    /// carry no type and need [`ResourceRecord::new`].
    pub fn from_data(name: DomainName, ttl: u32, data: RecordData) -> Option<Self> {
        let record_type = data.natural_type()?;
        Some(Self::new(name, record_type, ttl, data))
    }

    pub fn with_class(mut self, class: u16) -> Self {
        self.class = class;
        self
    }

    pub fn with_name(&self, name: DomainName) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    pub fn with_ttl(&self, ttl: u32) -> Self {
        Self {
            ttl,
            ..self.clone()
        }
    }
}

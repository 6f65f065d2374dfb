#![allow(dead_code)]
use ferrous_authority_domain::{
    DnskeyData, DomainName, RecordData, RecordType, ResourceRecord, SoaData,
};
use std::net::Ipv4Addr;

pub fn name(s: &str) -> DomainName {
    s.parse().expect("Invalid domain name")
}

pub struct ResourceRecordBuilder {
    name: DomainName,
    record_type: RecordType,
    ttl: u32,
    data: RecordData,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: name("example.com"),
            record_type: RecordType::A,
            ttl: 300,
            data: RecordData::A(Ipv4Addr::new(192, 0, 2, 1)),
        }
    }

    pub fn name(mut self, owner: &str) -> Self {
        self.name = name(owner);
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn a(mut self, address: &str) -> Self {
        self.record_type = RecordType::A;
        self.data = RecordData::A(address.parse().expect("Invalid IPv4 address"));
        self
    }

    pub fn ns(mut self, target: &str) -> Self {
        self.record_type = RecordType::NS;
        self.data = RecordData::Ns(name(target));
        self
    }

    pub fn soa(mut self, minimum: u32) -> Self {
        self.record_type = RecordType::SOA;
        self.data = RecordData::Soa(soa_data(minimum));
        self
    }

    pub fn dnskey(mut self, flags: u16) -> Self {
        self.record_type = RecordType::DNSKEY;
        self.data = RecordData::Dnskey(DnskeyData {
            flags,
            protocol: 3,
            algorithm: 13,
            public_key: vec![0xAB; 64],
        });
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(self.name, self.record_type, self.ttl, self.data)
    }
}

impl Default for ResourceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn soa_data(minimum: u32) -> SoaData {
    SoaData {
        mname: name("ns1.example.com"),
        rname: name("hostmaster.example.com"),
        serial: 2024010101,
        refresh: 3600,
        retry: 900,
        expire: 604800,
        minimum,
    }
}

#![allow(dead_code)]
use ferrous_authority_domain::{
    DnskeyData, DomainName, MxData, OptData, RecordData, RecordType, ResourceRecord, SoaData,
};
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn name(s: &str) -> DomainName {
    s.parse().expect("Invalid domain name")
}

pub fn a(owner: &str, address: Ipv4Addr) -> ResourceRecord {
    ResourceRecord::new(name(owner), RecordType::A, 300, RecordData::A(address))
}

pub fn aaaa(owner: &str, address: Ipv6Addr) -> ResourceRecord {
    ResourceRecord::new(name(owner), RecordType::AAAA, 300, RecordData::Aaaa(address))
}

pub fn ns(owner: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(name(owner), RecordType::NS, 3600, RecordData::Ns(name(target)))
}

pub fn cname(owner: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(
        name(owner),
        RecordType::CNAME,
        300,
        RecordData::Cname(name(target)),
    )
}

pub fn mx(owner: &str, preference: u16, exchange: &str) -> ResourceRecord {
    ResourceRecord::new(
        name(owner),
        RecordType::MX,
        300,
        RecordData::Mx(MxData {
            preference,
            exchange: name(exchange),
        }),
    )
}

pub fn soa(owner: &str, ttl: u32, minimum: u32) -> ResourceRecord {
    ResourceRecord::new(
        name(owner),
        RecordType::SOA,
        ttl,
        RecordData::Soa(SoaData {
            mname: name("ns1.example.com"),
            rname: name("hostmaster.example.com"),
            serial: 2024010101,
            refresh: 3600,
            retry: 900,
            expire: 604800,
            minimum,
        }),
    )
}

pub fn dnskey(owner: &str, flags: u16) -> ResourceRecord {
    ResourceRecord::new(
        name(owner),
        RecordType::DNSKEY,
        3600,
        RecordData::Dnskey(DnskeyData {
            flags,
            protocol: 3,
            algorithm: 13,
            public_key: vec![0x5A; 64],
        }),
    )
}

pub fn opt(udp_payload_size: u16) -> ResourceRecord {
    ResourceRecord::new(
        DomainName::root(),
        RecordType::OPT,
        0,
        RecordData::Opt(OptData { udp_payload_size }),
    )
}

/// A small zone with a delegation, a wildcard and an apex SOA.
pub fn example_zone() -> Vec<ResourceRecord> {
    vec![
        soa("example.com", 3600, 300),
        ns("example.com", "ns1.example.com"),
        ns("sub.example.com", "ns.sub.example.com"),
        a("ns1.example.com", Ipv4Addr::new(192, 0, 2, 53)),
        a("ns.sub.example.com", Ipv4Addr::new(192, 0, 2, 54)),
        aaaa("ns.sub.example.com", "2001:db8::54".parse().expect("Invalid IPv6")),
        a("www.example.com", Ipv4Addr::new(192, 0, 2, 10)),
        aaaa("www.example.com", "2001:db8::10".parse().expect("Invalid IPv6")),
        cname("ftp.example.com", "www.example.com"),
        mx("example.com", 10, "mail.example.com"),
        a("*.example.com", Ipv4Addr::new(192, 0, 2, 99)),
        dnskey("example.com", 256),
        dnskey("example.com", 257),
    ]
}

#![allow(dead_code)]
use hickory_proto::dnssec::rdata::{DNSSECRData, DNSKEY};
use hickory_proto::dnssec::{Algorithm, PublicKeyBuf};
use hickory_proto::rr::rdata::{A, NS, OPT, SOA};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn hickory_name(name: &str) -> Name {
    Name::from_str(name).expect("Invalid hickory name")
}

pub fn make_a_record(name: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(hickory_name(name), 300, RData::A(A(ip)))
}

pub fn make_ns_record(zone: &str, target: &str) -> Record {
    Record::from_rdata(hickory_name(zone), 3600, RData::NS(NS(hickory_name(target))))
}

pub fn make_soa_record(zone: &str, minimum: u32, record_ttl: u32) -> Record {
    let name = hickory_name(&format!("{}.", zone));
    let mname = hickory_name(&format!("ns1.{}.", zone));
    let rname = hickory_name(&format!("hostmaster.{}.", zone));
    let soa = SOA::new(mname, rname, 1, 3600, 900, 604800, minimum);
    Record::from_rdata(name, record_ttl, RData::SOA(soa))
}

pub fn make_dnskey_record(zone: &str, flags: u16) -> Record {
    let public_key = PublicKeyBuf::new(vec![0x42; 32], Algorithm::ED25519);
    let dnskey = DNSKEY::with_flags(flags, public_key);
    Record::from_rdata(
        hickory_name(zone),
        3600,
        RData::DNSSEC(DNSSECRData::DNSKEY(dnskey)),
    )
}

pub fn make_opt_record(udp_payload_size: u16) -> Record {
    let mut record = Record::from_rdata(Name::root(), 0, RData::OPT(OPT::default()));
    record.set_dns_class(DNSClass::for_opt(udp_payload_size));
    record
}

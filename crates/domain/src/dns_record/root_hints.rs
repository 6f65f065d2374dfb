use super::{RecordData, RecordType, ResourceRecord};
use crate::DomainName;
use std::net::Ipv4Addr;
use std::sync::LazyLock;

pub const ROOT_NS_TTL: u32 = 518_400;

pub const ROOT_A_TTL: u32 = 3_600_000;

/// Root servers and their IPv4 addresses as published in the IANA root hints file.
pub static ROOT_SERVERS: &[(&str, Ipv4Addr)] = &[
    ("a.root-servers.net", Ipv4Addr::new(198, 41, 0, 4)),
    ("b.root-servers.net", Ipv4Addr::new(170, 247, 170, 2)),
    ("c.root-servers.net", Ipv4Addr::new(192, 33, 4, 12)),
    ("d.root-servers.net", Ipv4Addr::new(199, 7, 91, 13)),
    ("e.root-servers.net", Ipv4Addr::new(192, 203, 230, 10)),
    ("f.root-servers.net", Ipv4Addr::new(192, 5, 5, 241)),
    ("g.root-servers.net", Ipv4Addr::new(192, 112, 36, 4)),
    ("h.root-servers.net", Ipv4Addr::new(198, 97, 190, 53)),
    ("i.root-servers.net", Ipv4Addr::new(192, 36, 148, 17)),
    ("j.root-servers.net", Ipv4Addr::new(192, 58, 128, 30)),
    ("k.root-servers.net", Ipv4Addr::new(193, 0, 14, 129)),
    ("l.root-servers.net", Ipv4Addr::new(199, 7, 83, 42)),
    ("m.root-servers.net", Ipv4Addr::new(202, 12, 27, 33)),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootHints {
    ns_records: Vec<ResourceRecord>,
    a_records: Vec<ResourceRecord>,
}

impl RootHints {
    fn build() -> Self {
        let mut ns_records = Vec::with_capacity(ROOT_SERVERS.len());
        let mut a_records = Vec::with_capacity(ROOT_SERVERS.len());

        for (host, address) in ROOT_SERVERS {
            let host = DomainName::from_static(host);
            ns_records.push(ResourceRecord::new(
                DomainName::root(),
                RecordType::NS,
                ROOT_NS_TTL,
                RecordData::Ns(host.clone()),
            ));
            a_records.push(ResourceRecord::new(
                host,
                RecordType::A,
                ROOT_A_TTL,
                RecordData::A(*address),
            ));
        }

        Self {
            ns_records,
            a_records,
        }
    }

    pub fn ns_records(&self) -> &[ResourceRecord] {
        &self.ns_records
    }

    pub fn a_records(&self) -> &[ResourceRecord] {
        &self.a_records
    }
}

static ROOT_HINTS: LazyLock<RootHints> = LazyLock::new(RootHints::build);

pub fn root_hints() -> &'static RootHints {
    &ROOT_HINTS
}

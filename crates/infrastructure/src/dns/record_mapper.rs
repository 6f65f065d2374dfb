//! Conversion between domain records and `hickory_proto` records.
//!
//! Incoming records map onto the closed `RecordData` set. Payloads without a
//! domain counterpart keep their rdata wire bytes as `RecordData::Opaque`.

use ferrous_authority_domain::{
    DnskeyData, DomainError, DomainName, MxData, OptData, RecordData, RecordType,
    ResourceRecord, SoaData,
};
use hickory_proto::dnssec::rdata::{DNSSECRData, DNSKEY};
use hickory_proto::dnssec::{Algorithm, PublicKey, PublicKeyBuf};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, PTR, SOA, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;

/// Payload size advertised by an OPT record whose class is not `DNSClass::OPT`.
const MIN_UDP_PAYLOAD: u16 = 512;

pub struct RecordMapper;

impl RecordMapper {
    /// Reads the labels back out of the uncompressed wire form, so raw label
    /// bytes survive unchanged.
    pub fn name_from_hickory(name: &Name) -> Result<DomainName, DomainError> {
        let wire = name
            .to_bytes()
            .map_err(|e| DomainError::InvalidDomainName(format!("{name}: {e}")))?;

        let mut labels = Vec::new();
        let mut rest = wire.as_slice();
        while let Some((&len, tail)) = rest.split_first() {
            if len == 0 {
                break;
            }
            let len = usize::from(len);
            if tail.len() < len {
                return Err(DomainError::InvalidDomainName(format!(
                    "{name}: truncated label"
                )));
            }
            let (label, remaining) = tail.split_at(len);
            labels.push(label);
            rest = remaining;
        }

        DomainName::from_labels(labels)
    }

    pub fn name_to_hickory(name: &DomainName) -> Result<Name, DomainError> {
        Name::from_labels(name.labels().iter().map(|label| label.as_bytes()))
            .map_err(|e| DomainError::InvalidDomainName(format!("{name}: {e}")))
    }

    pub fn from_hickory(record: &Record) -> Result<ResourceRecord, DomainError> {
        let name = Self::name_from_hickory(record.name())?;
        let record_type = RecordType::from(u16::from(record.record_type()));

        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::Aaaa(aaaa.0),
            RData::NS(ns) => RecordData::Ns(Self::name_from_hickory(&ns.0)?),
            RData::CNAME(cname) => RecordData::Cname(Self::name_from_hickory(&cname.0)?),
            RData::PTR(ptr) => RecordData::Ptr(Self::name_from_hickory(&ptr.0)?),
            RData::MX(mx) => RecordData::Mx(MxData {
                preference: mx.preference(),
                exchange: Self::name_from_hickory(mx.exchange())?,
            }),
            RData::TXT(txt) => {
                RecordData::Txt(txt.txt_data().iter().map(|s| s.to_vec()).collect())
            }
            RData::SOA(soa) => RecordData::Soa(Self::soa_from_hickory(soa)?),
            RData::DNSSEC(DNSSECRData::DNSKEY(dnskey)) => {
                let pk = dnskey.public_key();
                RecordData::Dnskey(DnskeyData {
                    flags: dnskey.flags(),
                    protocol: 3,
                    algorithm: u8::from(<dyn PublicKey>::algorithm(pk)),
                    public_key: <dyn PublicKey>::public_bytes(pk).to_vec(),
                })
            }
            RData::OPT(_) => RecordData::Opt(OptData {
                udp_payload_size: match record.dns_class() {
                    DNSClass::OPT(size) => size,
                    _ => MIN_UDP_PAYLOAD,
                },
            }),
            other => RecordData::Opaque(
                other
                    .to_bytes()
                    .map_err(|e| DomainError::InvalidRecordData(e.to_string()))?,
            ),
        };

        Ok(ResourceRecord::new(name, record_type, record.ttl(), data)
            .with_class(u16::from(record.dns_class())))
    }

    pub fn to_hickory(record: &ResourceRecord) -> Result<Record, DomainError> {
        let name = Self::name_to_hickory(&record.name)?;

        let rdata = match &record.data {
            RecordData::A(address) => RData::A(A(*address)),
            RecordData::Aaaa(address) => RData::AAAA(AAAA(*address)),
            RecordData::Ns(target) => RData::NS(NS(Self::name_to_hickory(target)?)),
            RecordData::Cname(target) => RData::CNAME(CNAME(Self::name_to_hickory(target)?)),
            RecordData::Ptr(target) => RData::PTR(PTR(Self::name_to_hickory(target)?)),
            RecordData::Mx(mx) => RData::MX(MX::new(
                mx.preference,
                Self::name_to_hickory(&mx.exchange)?,
            )),
            RecordData::Txt(strings) => {
                RData::TXT(TXT::from_bytes(strings.iter().map(Vec::as_slice).collect()))
            }
            RecordData::Soa(soa) => RData::SOA(Self::soa_to_hickory(soa)?),
            RecordData::Dnskey(key) => {
                let public_key =
                    PublicKeyBuf::new(key.public_key.clone(), Algorithm::from_u8(key.algorithm));
                RData::DNSSEC(DNSSECRData::DNSKEY(DNSKEY::with_flags(key.flags, public_key)))
            }
            RecordData::Opt(_) | RecordData::Opaque(_) => {
                return Err(DomainError::UnsupportedRecordData(format!(
                    "cannot encode {} payload for {}",
                    record.record_type, record.name
                )));
            }
        };

        Ok(Record::from_rdata(name, record.ttl, rdata))
    }

    fn soa_from_hickory(soa: &SOA) -> Result<SoaData, DomainError> {
        Ok(SoaData {
            mname: Self::name_from_hickory(soa.mname())?,
            rname: Self::name_from_hickory(soa.rname())?,
            serial: soa.serial(),
            refresh: soa_timer(soa.refresh(), "refresh")?,
            retry: soa_timer(soa.retry(), "retry")?,
            expire: soa_timer(soa.expire(), "expire")?,
            minimum: soa.minimum(),
        })
    }

    fn soa_to_hickory(soa: &SoaData) -> Result<SOA, DomainError> {
        Ok(SOA::new(
            Self::name_to_hickory(&soa.mname)?,
            Self::name_to_hickory(&soa.rname)?,
            soa.serial,
            soa_timer(soa.refresh, "refresh")?,
            soa_timer(soa.retry, "retry")?,
            soa_timer(soa.expire, "expire")?,
            soa.minimum,
        ))
    }
}

/// SOA timers are signed on the hickory side and unsigned here.
fn soa_timer<S, T>(value: S, field: &str) -> Result<T, DomainError>
where
    S: Copy + std::fmt::Display,
    T: TryFrom<S>,
{
    T::try_from(value)
        .map_err(|_| DomainError::InvalidRecordData(format!("SOA {field} out of range: {value}")))
}

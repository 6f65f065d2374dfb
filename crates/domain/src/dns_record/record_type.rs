use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Numeric DNS RR type code.
///
/// Codes outside the mnemonic table are valid values too; they display in
/// the generic `TYPE<n>` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordType(u16);

impl RecordType {
    pub const A: RecordType = RecordType(1);
    pub const NS: RecordType = RecordType(2);
    pub const CNAME: RecordType = RecordType(5);
    pub const SOA: RecordType = RecordType(6);
    pub const PTR: RecordType = RecordType(12);
    pub const MX: RecordType = RecordType(15);
    pub const TXT: RecordType = RecordType(16);
    pub const AAAA: RecordType = RecordType(28);
    pub const SRV: RecordType = RecordType(33);
    pub const DNAME: RecordType = RecordType(39);
    pub const OPT: RecordType = RecordType(41);
    pub const DS: RecordType = RecordType(43);
    pub const RRSIG: RecordType = RecordType(46);
    pub const NSEC: RecordType = RecordType(47);
    pub const DNSKEY: RecordType = RecordType(48);
    pub const NSEC3: RecordType = RecordType(50);
    pub const ANY: RecordType = RecordType(255);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn code(self) -> u16 {
        self.0
    }

    pub fn mnemonic(self) -> Option<&'static str> {
        RECORD_TYPES
            .iter()
            .find(|(_, code)| *code == self.0)
            .map(|(mnemonic, _)| *mnemonic)
    }

    pub fn is_address(self) -> bool {
        self == Self::A || self == Self::AAAA
    }
}

/// Mnemonic to type code registry. Order follows the code values.
pub static RECORD_TYPES: &[(&str, u16)] = &[
    ("A", 1),
    ("NS", 2),
    ("MD", 3),
    ("MF", 4),
    ("CNAME", 5),
    ("SOA", 6),
    ("MB", 7),
    ("MG", 8),
    ("MR", 9),
    ("NULL", 10),
    ("WKS", 11),
    ("PTR", 12),
    ("HINFO", 13),
    ("MINFO", 14),
    ("MX", 15),
    ("TXT", 16),
    ("RP", 17),
    ("AFSDB", 18),
    ("X25", 19),
    ("ISDN", 20),
    ("RT", 21),
    ("NSAP", 22),
    ("SIG", 24),
    ("KEY", 25),
    ("PX", 26),
    ("GPOS", 27),
    ("AAAA", 28),
    ("LOC", 29),
    ("NXT", 30),
    ("EID", 31),
    ("NIMLOC", 32),
    ("SRV", 33),
    ("ATMA", 34),
    ("NAPTR", 35),
    ("KX", 36),
    ("CERT", 37),
    ("DNAME", 39),
    ("SINK", 40),
    ("OPT", 41),
    ("APL", 42),
    ("DS", 43),
    ("SSHFP", 44),
    ("IPSECKEY", 45),
    ("RRSIG", 46),
    ("NSEC", 47),
    ("DNSKEY", 48),
    ("DHCID", 49),
    ("NSEC3", 50),
    ("NSEC3PARAM", 51),
    ("HIP", 55),
    ("NINFO", 56),
    ("RKEY", 57),
    ("TALINK", 58),
    ("SPF", 99),
    ("UINFO", 100),
    ("UID", 101),
    ("GID", 102),
    ("UNSPEC", 103),
    ("TKEY", 249),
    ("TSIG", 250),
    ("IXFR", 251),
    ("AXFR", 252),
    ("MAILB", 253),
    ("MAILA", 254),
    ("ANY", 255),
    ("DLV", 32769),
];

/// Exact, case-sensitive lookup of a mnemonic such as `"AAAA"`.
pub fn type_code_for(mnemonic: &str) -> Option<RecordType> {
    RECORD_TYPES
        .iter()
        .find(|(name, _)| *name == mnemonic)
        .map(|(_, code)| RecordType(*code))
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl From<RecordType> for u16 {
    fn from(rtype: RecordType) -> Self {
        rtype.0
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(mnemonic) => f.write_str(mnemonic),
            None => write!(f, "TYPE{}", self.0),
        }
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rtype) = type_code_for(s) {
            return Ok(rtype);
        }

        s.strip_prefix("TYPE")
            .and_then(|digits| digits.parse::<u16>().ok())
            .map(RecordType)
            .ok_or_else(|| DomainError::UnknownRecordType(s.to_string()))
    }
}

//! Composable predicates over single resource records.
//!
//! Each predicate is a small value built once from its match parameters and
//! then applied to any number of records. Predicates never look at anything
//! but the record they are given, so they can be shared freely across threads.
//! Type-specific predicates answer `false` for records of another shape.

use ferrous_authority_domain::{DomainName, RecordData, RecordType, ResourceRecord};

pub trait RecordPredicate {
    fn matches(&self, record: &ResourceRecord) -> bool;
}

impl<P: RecordPredicate + ?Sized> RecordPredicate for &P {
    #[inline]
    fn matches(&self, record: &ResourceRecord) -> bool {
        (**self).matches(record)
    }
}

impl<P: RecordPredicate + ?Sized> RecordPredicate for Box<P> {
    #[inline]
    fn matches(&self, record: &ResourceRecord) -> bool {
        (**self).matches(record)
    }
}

/// Combinators available on every predicate.
pub trait RecordPredicateExt: RecordPredicate + Sized {
    fn negate(self) -> Not<Self> {
        Not(self)
    }

    fn and<P: RecordPredicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    fn or<P: RecordPredicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }
}

impl<T: RecordPredicate> RecordPredicateExt for T {}

/// A rewrite from one record to a new record.
pub trait RecordTransform {
    fn apply(&self, record: &ResourceRecord) -> ResourceRecord;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByName {
    name: DomainName,
}

impl RecordPredicate for ByName {
    fn matches(&self, record: &ResourceRecord) -> bool {
        record.name == self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByType {
    record_type: RecordType,
}

impl RecordPredicate for ByType {
    fn matches(&self, record: &ResourceRecord) -> bool {
        record.record_type == self.record_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByTypes {
    types: Vec<RecordType>,
}

impl RecordPredicate for ByTypes {
    fn matches(&self, record: &ResourceRecord) -> bool {
        self.types.contains(&record.record_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WildcardOwner;

impl RecordPredicate for WildcardOwner {
    fn matches(&self, record: &ResourceRecord) -> bool {
        record.name.has_wildcard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlueFor {
    name: DomainName,
}

impl RecordPredicate for GlueFor {
    fn matches(&self, record: &ResourceRecord) -> bool {
        matches!(&record.data, RecordData::Ns(target) if *target == self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnskeyFlag {
    flag: u16,
}

impl RecordPredicate for DnskeyFlag {
    fn matches(&self, record: &ResourceRecord) -> bool {
        matches!(&record.data, RecordData::Dnskey(key) if key.flags == self.flag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptRecord;

impl RecordPredicate for OptRecord {
    fn matches(&self, record: &ResourceRecord) -> bool {
        matches!(record.data, RecordData::Opt(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<P>(P);

impl<P: RecordPredicate> RecordPredicate for Not<P> {
    fn matches(&self, record: &ResourceRecord) -> bool {
        !self.0.matches(record)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B>(A, B);

impl<A: RecordPredicate, B: RecordPredicate> RecordPredicate for And<A, B> {
    fn matches(&self, record: &ResourceRecord) -> bool {
        self.0.matches(record) && self.1.matches(record)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<A, B>(A, B);

impl<A: RecordPredicate, B: RecordPredicate> RecordPredicate for Or<A, B> {
    fn matches(&self, record: &ResourceRecord) -> bool {
        self.0.matches(record) || self.1.matches(record)
    }
}

/// Wraps a closure so it composes with the other predicates.
#[derive(Clone, Copy)]
pub struct FnPredicate<F>(F);

impl<F> RecordPredicate for FnPredicate<F>
where
    F: Fn(&ResourceRecord) -> bool,
{
    fn matches(&self, record: &ResourceRecord) -> bool {
        (self.0)(record)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceName {
    name: DomainName,
}

impl RecordTransform for ReplaceName {
    fn apply(&self, record: &ResourceRecord) -> ResourceRecord {
        record.with_name(self.name.clone())
    }
}

/// Owner name equals `name` exactly. No wildcard logic.
pub fn by_name(name: DomainName) -> ByName {
    ByName { name }
}

pub fn by_type(record_type: RecordType) -> ByType {
    ByType { record_type }
}

pub fn by_types(types: impl IntoIterator<Item = RecordType>) -> ByTypes {
    let mut types: Vec<RecordType> = types.into_iter().collect();
    types.sort_unstable();
    types.dedup();
    ByTypes { types }
}

/// Any owner label is `*`, not only the first one.
pub fn is_wildcard_owner() -> WildcardOwner {
    WildcardOwner
}

/// The record is NS data pointing at `name`.
pub fn is_glue_for(name: DomainName) -> GlueFor {
    GlueFor { name }
}

pub fn has_dnskey_flag(flag: u16) -> DnskeyFlag {
    DnskeyFlag { flag }
}

/// Matches on payload shape, not on the type code.
pub fn is_opt_record() -> OptRecord {
    OptRecord
}

pub fn negate<P: RecordPredicate>(predicate: P) -> Not<P> {
    Not(predicate)
}

pub fn from_fn<F>(f: F) -> FnPredicate<F>
where
    F: Fn(&ResourceRecord) -> bool,
{
    FnPredicate(f)
}

pub fn replace_name(name: DomainName) -> ReplaceName {
    ReplaceName { name }
}

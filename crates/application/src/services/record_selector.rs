use super::record_predicate::{RecordPredicate, RecordTransform};
use ferrous_authority_domain::ResourceRecord;

/// Applies predicates and transforms across a record set.
pub struct RecordSelector;

impl RecordSelector {
    pub fn filter<P: RecordPredicate>(
        records: &[ResourceRecord],
        predicate: &P,
    ) -> Vec<ResourceRecord> {
        records
            .iter()
            .filter(|r| predicate.matches(r))
            .cloned()
            .collect()
    }

    pub fn first<'a, P: RecordPredicate>(
        records: &'a [ResourceRecord],
        predicate: &P,
    ) -> Option<&'a ResourceRecord> {
        records.iter().find(|r| predicate.matches(r))
    }

    pub fn any<P: RecordPredicate>(records: &[ResourceRecord], predicate: &P) -> bool {
        records.iter().any(|r| predicate.matches(r))
    }

    pub fn count<P: RecordPredicate>(records: &[ResourceRecord], predicate: &P) -> usize {
        records.iter().filter(|r| predicate.matches(r)).count()
    }

    pub fn rewrite<T: RecordTransform>(
        records: &[ResourceRecord],
        transform: &T,
    ) -> Vec<ResourceRecord> {
        records.iter().map(|r| transform.apply(r)).collect()
    }
}

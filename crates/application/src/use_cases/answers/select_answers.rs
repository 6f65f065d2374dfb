use crate::services::{
    by_name, by_type, by_types, from_fn, has_dnskey_flag, is_glue_for, is_opt_record,
    replace_name, RecordPredicate, RecordPredicateExt, RecordSelector, RecordTransform,
};
use ferrous_authority_domain::{
    clamp_ttl_to_soa_minimum, names_equivalent, wildcard_form, wildcard_substitute, DomainName,
    RecordType, ResourceRecord,
};
use tracing::{debug, instrument, trace};

/// Records picked from a zone for one question, grouped by message section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSelection {
    pub answers: Vec<ResourceRecord>,

    pub additionals: Vec<ResourceRecord>,

    pub authority: Vec<ResourceRecord>,

    /// Answers were synthesized from a wildcard owner.
    pub wildcard_expanded: bool,
}

impl AnswerSelection {
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Picks answer, glue and negative-response records for a question out of a
/// zone's record set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectAnswersUseCase;

impl SelectAnswersUseCase {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, zone), fields(zone_records = zone.len()))]
    pub fn execute(
        &self,
        zone: &[ResourceRecord],
        qname: &DomainName,
        qtype: RecordType,
    ) -> AnswerSelection {
        let wanted = by_types([qtype, RecordType::CNAME]);
        let type_filter =
            from_fn(move |r: &ResourceRecord| qtype == RecordType::ANY || wanted.matches(r));
        let answerable = is_opt_record().negate().and(type_filter);
        let owner = by_name(qname.clone());

        let mut answers = RecordSelector::filter(zone, &(&owner).and(&answerable));
        let mut wildcard_expanded = false;

        if answers.is_empty() && !Self::node_exists(zone, qname) {
            answers = Self::expand_wildcard(zone, qname, &answerable);
            wildcard_expanded = !answers.is_empty();
        }

        let additionals = Self::glue_for(zone, &answers);
        let authority = if answers.is_empty() {
            Self::negative_authority(zone)
        } else {
            Vec::new()
        };

        debug!(
            qname = %qname,
            qtype = %qtype,
            answers = answers.len(),
            additionals = additionals.len(),
            authority = authority.len(),
            wildcard = wildcard_expanded,
            "Answer selection complete"
        );

        AnswerSelection {
            answers,
            additionals,
            authority,
            wildcard_expanded,
        }
    }

    /// DNSKEY records in `zone` whose flags equal `flag` exactly.
    pub fn signing_keys(&self, zone: &[ResourceRecord], flag: u16) -> Vec<ResourceRecord> {
        RecordSelector::filter(zone, &by_type(RecordType::DNSKEY).and(has_dnskey_flag(flag)))
    }

    /// A name exists when it, or any name below it, owns a record.
    fn node_exists(zone: &[ResourceRecord], name: &DomainName) -> bool {
        zone.iter().any(|r| r.name.is_subdomain_of(name))
    }

    /// Answers from the wildcard at the closest encloser of `qname`.
    ///
    /// Ancestors are tried longest first. The first one holding a `*` child
    /// is the only source of answers; an existing ancestor without one ends
    /// the search.
    fn expand_wildcard<P: RecordPredicate>(
        zone: &[ResourceRecord],
        qname: &DomainName,
        answerable: &P,
    ) -> Vec<ResourceRecord> {
        for depth in (0..qname.label_count()).rev() {
            let Ok(wildcard) = wildcard_form(&qname.suffix(depth + 1)) else {
                continue;
            };

            let source = by_name(wildcard);
            if RecordSelector::any(zone, &source) {
                trace!(qname = %qname, encloser_labels = depth, "Expanding closest wildcard");
                let candidates = source
                    .and(answerable)
                    .and(from_fn(|r: &ResourceRecord| names_equivalent(&r.name, qname)));

                return zone
                    .iter()
                    .filter(|r| candidates.matches(r))
                    .map(|r| replace_name(wildcard_substitute(&r.name, qname)).apply(r))
                    .collect();
            }

            if Self::node_exists(zone, &qname.suffix(depth)) {
                break;
            }
        }

        Vec::new()
    }

    /// Address records owned by the target of an NS answer.
    fn glue_for(zone: &[ResourceRecord], answers: &[ResourceRecord]) -> Vec<ResourceRecord> {
        let delegations = RecordSelector::filter(answers, &by_type(RecordType::NS));
        if delegations.is_empty() {
            return Vec::new();
        }

        zone.iter()
            .filter(|r| r.record_type.is_address())
            .filter(|r| RecordSelector::any(&delegations, &is_glue_for(r.name.clone())))
            .cloned()
            .collect()
    }

    /// The zone SOA with its TTL capped at the SOA minimum.
    fn negative_authority(zone: &[ResourceRecord]) -> Vec<ResourceRecord> {
        zone.iter()
            .filter(|r| by_type(RecordType::SOA).matches(r))
            .map(|r| clamp_ttl_to_soa_minimum(r, &r.data))
            .collect()
    }
}

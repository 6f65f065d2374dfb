//! Wildcard-aware comparison of owner names against query names.

use crate::dns_name::{DomainName, Label};
use crate::DomainError;

/// Replaces the first label of `name` with `*`.
///
/// `*.a1.example.com` is the wildcard form of `a.a1.example.com`. The root
/// has no labels to replace and is rejected.
pub fn wildcard_form(name: &DomainName) -> Result<DomainName, DomainError> {
    let Some((_, rest)) = name.labels().split_first() else {
        return Err(DomainError::RootHasNoWildcardForm);
    };

    let mut labels = Vec::with_capacity(name.label_count());
    labels.push(Label::wildcard());
    labels.extend_from_slice(rest);
    Ok(DomainName::from_label_slice(&labels))
}

/// Drops the leading run of `*` labels, but only from names that carry a
/// wildcard label somewhere. Names without one come back unchanged.
pub fn strip_leading_wildcards(name: &DomainName) -> DomainName {
    if !name.has_wildcard() {
        return name.clone();
    }

    let leading = name
        .labels()
        .iter()
        .take_while(|label| label.is_wildcard())
        .count();
    DomainName::from_label_slice(&name.labels()[leading..])
}

/// Keeps `target` as is when `original` lost nothing to stripping, otherwise
/// cuts `target` down to the last `stripped.label_count()` labels.
fn align_length(original: &DomainName, stripped: &DomainName, target: &DomainName) -> DomainName {
    if stripped.label_count() == original.label_count() {
        target.clone()
    } else {
        target.suffix(stripped.label_count())
    }
}

/// Decides whether two names match once wildcard labels are taken into account.
///
/// Each side is stripped of its leading wildcards, then each stripped side is
/// truncated to the suffix length of the *other* side whenever that other side
/// actually lost labels. The truncation is asymmetric on purpose: with no
/// wildcard anywhere this is plain equality, and with a wildcard on one side
/// only the other side is compared by suffix.
pub fn names_equivalent(a: &DomainName, b: &DomainName) -> bool {
    let stripped_a = strip_leading_wildcards(a);
    let stripped_b = strip_leading_wildcards(b);

    let truncated_b = align_length(a, &stripped_a, &stripped_b);
    let truncated_a = align_length(b, &stripped_b, &stripped_a);

    truncated_a == truncated_b
}

/// Returns `query` when `candidate` matches it under wildcard rules, else `candidate`.
pub fn wildcard_substitute(candidate: &DomainName, query: &DomainName) -> DomainName {
    if names_equivalent(candidate, query) {
        query.clone()
    } else {
        candidate.clone()
    }
}

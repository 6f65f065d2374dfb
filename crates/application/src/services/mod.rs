pub mod record_predicate;
pub mod record_selector;

pub use record_predicate::{
    by_name, by_type, by_types, from_fn, has_dnskey_flag, is_glue_for, is_opt_record,
    is_wildcard_owner, negate, replace_name, RecordPredicate, RecordPredicateExt,
    RecordTransform,
};
pub use record_selector::RecordSelector;

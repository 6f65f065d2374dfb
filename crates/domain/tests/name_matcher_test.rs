use ferrous_authority_domain::{
    names_equivalent, strip_leading_wildcards, wildcard_form, wildcard_substitute, DomainError,
};

mod helpers;
use helpers::name;

#[test]
fn test_wildcard_form_replaces_first_label() {
    let wildcard = wildcard_form(&name("a.a1.example.com")).unwrap();
    assert_eq!(wildcard, name("*.a1.example.com"));
    assert!(wildcard.is_wildcard());
}

#[test]
fn test_wildcard_form_of_single_label() {
    assert_eq!(wildcard_form(&name("com")).unwrap(), name("*"));
}

#[test]
fn test_wildcard_form_of_root_is_rejected() {
    assert_eq!(
        wildcard_form(&name(".")),
        Err(DomainError::RootHasNoWildcardForm)
    );
}

#[test]
fn test_reflexive_on_identical_names() {
    for n in [
        "a.a1.example.com",
        "*.a1.example.com",
        "*.*.example.com",
        "a.*.example.com",
        "com",
        "*",
    ] {
        assert!(names_equivalent(&name(n), &name(n)), "{n} should match itself");
    }
}

#[test]
fn test_wildcard_owner_matches_query() {
    assert!(names_equivalent(
        &name("a.a1.example.com"),
        &name("*.a1.example.com")
    ));
    assert!(names_equivalent(
        &name("*.a1.example.com"),
        &name("a.a1.example.com")
    ));
}

#[test]
fn test_wildcard_in_other_branch_does_not_match() {
    assert!(!names_equivalent(
        &name("a.a1.example.com"),
        &name("*.b1.example.com")
    ));
}

#[test]
fn test_plain_names_need_exact_equality() {
    assert!(!names_equivalent(
        &name("a.a1.example.com"),
        &name("a.b1.example.com")
    ));
    assert!(!names_equivalent(&name("example.com"), &name("www.example.com")));
}

#[test]
fn test_wildcard_matches_deeper_names() {
    assert!(names_equivalent(
        &name("*.example.com"),
        &name("x.y.example.com")
    ));
}

#[test]
fn test_leading_wildcard_run_is_stripped_together() {
    assert!(names_equivalent(&name("*.*.b.c"), &name("x.y.b.c")));
    assert!(names_equivalent(&name("*.*.b.c"), &name("x.b.c")));
}

#[test]
fn test_stripped_suffix_equal_to_whole_name() {
    assert!(names_equivalent(&name("*.b.c"), &name("b.c")));
    assert!(!names_equivalent(&name("*.b.c"), &name("b.d")));
}

#[test]
fn test_both_sides_wildcard() {
    assert!(names_equivalent(&name("*.b.c"), &name("*.b.c")));
    assert!(names_equivalent(&name("*.b.c"), &name("*.*.b.c")));
    assert!(!names_equivalent(&name("*.b.c"), &name("*.x.c")));
}

#[test]
fn test_interior_wildcard_is_not_stripped() {
    assert!(!names_equivalent(&name("a.*.c"), &name("a.b.c")));
    assert_eq!(strip_leading_wildcards(&name("a.*.c")), name("a.*.c"));
}

#[test]
fn test_strip_without_wildcard_is_identity() {
    assert_eq!(
        strip_leading_wildcards(&name("www.example.com")),
        name("www.example.com")
    );
}

#[test]
fn test_strip_is_idempotent() {
    for n in ["*.*.a.b", "*.a.b", "a.*.b", "a.b", "*", "*.*"] {
        let once = strip_leading_wildcards(&name(n));
        assert_eq!(strip_leading_wildcards(&once), once, "not idempotent for {n}");
    }
}

#[test]
fn test_strip_all_wildcards_gives_root() {
    assert!(strip_leading_wildcards(&name("*.*")).is_root());
}

#[test]
fn test_wildcard_substitute() {
    assert_eq!(
        wildcard_substitute(&name("a.a1.example.com"), &name("a.a1.example.com")),
        name("a.a1.example.com")
    );
    assert_eq!(
        wildcard_substitute(&name("*.a1.example.com"), &name("a.a1.example.com")),
        name("a.a1.example.com")
    );
    assert_eq!(
        wildcard_substitute(&name("*.b1.example.com"), &name("a.a1.example.com")),
        name("*.b1.example.com")
    );
}

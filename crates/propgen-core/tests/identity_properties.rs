//! Normalization properties that must hold for every identifier.

use propgen_core::identity::normalize_key;
use propgen_core::{ComponentIdentity, CoreError};

const NAMES: &[&str] = &[
    "accordion",
    "AlertDialog",
    "alert-dialog",
    "alertDialog",
    "Input OTP",
    "navigation_menu",
    "Sheet",
    "not-found",
    "toggle-group",
    "data table",
    "h1Heading",
    "Über-Card",
    "https://ui.shadcn.com/docs/components/tabs",
    "https://example.com/r/styles/default/context-menu.json?v=2",
];

#[test]
fn normalization_is_idempotent() {
    for name in NAMES {
        let id = ComponentIdentity::parse(name).expect("valid identifier");
        let again = ComponentIdentity::parse(id.normalized_key()).expect("key is valid input");
        assert_eq!(
            again.normalized_key(),
            id.normalized_key(),
            "key not stable for {name}"
        );
        assert_eq!(
            again.type_name_prefix(),
            id.type_name_prefix(),
            "prefix not stable for {name}"
        );
        assert_eq!(normalize_key(id.normalized_key()), id.normalized_key());
    }
}

#[test]
fn prefix_is_pure_function_of_raw_name() {
    for name in NAMES {
        let first = ComponentIdentity::parse(name).expect("valid identifier");
        let second = ComponentIdentity::parse(name).expect("valid identifier");
        assert_eq!(first, second);
    }
}

#[test]
fn keys_are_lowercase_kebab() {
    for name in NAMES {
        let id = ComponentIdentity::parse(name).expect("valid identifier");
        let key = id.normalized_key();
        assert!(!key.starts_with('-') && !key.ends_with('-'), "{key}");
        assert!(!key.contains("--"), "{key}");
        assert!(!key.chars().any(char::is_uppercase), "{key}");
    }
}

#[test]
fn docs_url_scenario() {
    let id = ComponentIdentity::parse("https://ui.shadcn.com/docs/components/tabs")
        .expect("valid url");
    assert_eq!(id.normalized_key(), "tabs");
    assert_eq!(id.type_name_prefix(), "Tabs");
}

#[test]
fn empty_identifier_fails() {
    let err = ComponentIdentity::parse("").expect_err("empty must fail");
    assert!(matches!(err, CoreError::InvalidInput(_)));
    assert!(!err.is_recoverable());
}

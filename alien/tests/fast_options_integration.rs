//! Integration tests for abbreviated option keys.

mod common;

use alien::options::{
    expand_fast_options, FastOptionResolver, FastOptions, OptionKey, OptionValue, Options,
};
use alien::{build, Error};
use common::{prefixed, single};
use serde_json::json;

#[test]
fn test_fast_options_resolve() {
    let options = expand_fast_options(&single("a", "sta", OptionValue::action(|_| {})));
    assert!(options.advanced.start_action.is_some());

    let options = expand_fast_options(
        &FastOptions::new()
            .with("a", "sta", OptionValue::action(|_| {}))
            .with("c", "n", prefixed("x")),
    );
    assert!(options.advanced.start_action.is_some());
    assert!(options.control.name_transformer.is_some());

    let options = expand_fast_options(
        &FastOptions::new()
            .with("c", "n", prefixed("x"))
            .with("c", "c", true),
    );
    assert!(options.control.name_transformer.is_some());
    assert_eq!(options.control.create_blank_property, Some(true));
}

#[test]
fn test_fast_options_integrate_into_build() {
    let mut builder = build(["email"], Some(&single("c", "n", prefixed("_"))));
    builder.invoke("setEmail", "john").unwrap();
    assert_eq!(builder.value("_email"), Some(&json!("john")));
}

#[test]
fn test_camel_case_options_resolve() {
    let mut builder = build(["email"], Some(&single("c", "nT", prefixed("_"))));
    builder.invoke("setEmail", "john").unwrap();
    assert_eq!(builder.value("_email"), Some(&json!("john")));
}

#[test]
fn test_unmatched_keys_fall_back_to_defaults() {
    let config = FastOptions::new()
        .with("nope", "x", true)
        .with("c", "zzz", false);
    let mut builder = build(["email"], Some(&config));
    builder.invoke("setEmail", "john").unwrap();

    assert_eq!(builder.value("email"), Some(&json!("john")));
    assert!(builder.schema().is_some());
}

#[test]
fn test_strict_expansion_reports_the_key() {
    let err = FastOptionResolver::expand_strict(&single("nope", "x", true)).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("'nope'"));

    let err = FastOptionResolver::expand_strict(&single("c", "n", true)).unwrap_err();
    assert!(matches!(err, Error::InvalidOptionValue { .. }));
}

#[test]
fn test_text_configuration_round_trip() {
    let fast = FastOptions::from_yaml_str("{f: {rU: true}, oU: {reset: true}}").unwrap();
    let canonical =
        Options::from_yaml_str("finalization: {removeUnused: true}\nobjectUtilities: {reset: true}")
            .unwrap();

    let expanded = expand_fast_options(&fast);
    for key in OptionKey::ALL {
        assert_eq!(
            expanded.get(key).and_then(|v| v.as_flag()),
            canonical.get(key).and_then(|v| v.as_flag()),
            "{key}"
        );
    }
}

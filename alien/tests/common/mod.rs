//! Common test utilities for integration tests.
//!
//! Helpers for building configurations and bulk-assignment payloads.

use alien::options::{FastOptions, OptionValue};
use serde_json::{Map, Value};

/// Fast configuration with a single `section.option = value` entry.
#[allow(dead_code)]
pub fn single(section: &str, option: &str, value: impl Into<OptionValue>) -> FastOptions {
    FastOptions::new().with(section, option, value)
}

/// Name transform prefixing every identifier with `prefix`.
#[allow(dead_code)]
pub fn prefixed(prefix: &'static str) -> OptionValue {
    OptionValue::transform(move |name| format!("{prefix}{name}"))
}

/// Converts a JSON object literal into a bulk-assignment payload.
///
/// # Panics
///
/// Panics if `value` is not a JSON object.
#[allow(dead_code)]
pub fn partial(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

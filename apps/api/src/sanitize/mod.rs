//! Record sanitizer: strips null and placeholder values from a resume record.
//!
//! The cleaned record is a new structure; the caller's value is never touched.
//! Absence is signalled with `None`, never with an error.

pub mod handlers;
pub mod ocr;

use serde_json::{Map, Value};

/// String values that mean "no data", compared case-insensitively after trimming.
pub const PLACEHOLDER_TOKENS: &[&str] = &[
    "na",
    "n/a",
    "not applicable",
    "not available",
    "none",
    "null",
    "-",
    "",
];

/// Returns true if `text` (already trimmed) is a placeholder token.
pub fn is_placeholder(text: &str) -> bool {
    let lower = text.to_lowercase();
    PLACEHOLDER_TOKENS.contains(&lower.as_str())
}

/// Recursively cleans a resume record.
///
/// - Objects keep only entries whose cleaned value is present, in input order.
///   An object that cleans down to `{}` is still kept as a value under its key.
/// - Arrays drop absent items and empty objects; empty arrays survive.
/// - Strings are trimmed; placeholders become absent.
/// - `null` is absent; numbers and booleans pass through unchanged.
pub fn clean(value: &Value) -> Option<Value> {
    match value {
        Value::Object(map) => Some(Value::Object(clean_object(map))),
        Value::Array(items) => Some(Value::Array(clean_array(items))),
        Value::String(text) => clean_string(text).map(Value::String),
        Value::Null => None,
        other => Some(other.clone()),
    }
}

fn clean_object(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .filter_map(|(key, value)| {
            clean(value)
                .filter(|cleaned| !is_empty_string(cleaned))
                .map(|cleaned| (key.clone(), cleaned))
        })
        .collect()
}

fn clean_array(items: &[Value]) -> Vec<Value> {
    items
        .iter()
        .filter_map(clean)
        .filter(|cleaned| !is_empty_string(cleaned) && !is_empty_object(cleaned))
        .collect()
}

fn clean_string(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if is_placeholder(trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn is_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

fn is_empty_object(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.is_empty())
}

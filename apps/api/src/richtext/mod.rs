//! Rich-text segmentation: turns lightly marked-up text into bold/plain runs.
//!
//! Only `<strong>` carries meaning. Every other tag is removed blindly with a
//! `<[^>]+>` pass; entities are not decoded and nesting is not understood.

pub mod bullets;
pub mod handlers;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

static STRONG_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<strong>(.*?)</strong>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// A contiguous run of text and whether it renders bold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Splits `raw` into ordered segments.
///
/// `<strong>` pairs are matched left to right, first match wins, no overlap.
/// Text between matches is plain. Remaining tags are stripped from every
/// segment and whitespace-only segments are dropped.
pub fn segment(raw: &str) -> Vec<Segment> {
    if raw.is_empty() {
        return Vec::new();
    }

    let mut spans: Vec<(&str, bool)> = Vec::new();
    let mut cursor = 0;

    for caps in STRONG_SPAN.captures_iter(raw) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            spans.push((&raw[cursor..whole.start()], false));
        }
        spans.push((inner.as_str(), true));
        cursor = whole.end();
    }
    if cursor < raw.len() {
        spans.push((&raw[cursor..], false));
    }

    spans
        .into_iter()
        .filter_map(|(text, bold)| {
            let stripped = strip_tags(text);
            if stripped.trim().is_empty() {
                None
            } else if bold {
                Some(Segment::bold(stripped))
            } else {
                Some(Segment::plain(stripped))
            }
        })
        .collect()
}

/// Segments a JSON value after coercing it to text with [`coerce_text`].
pub fn segment_value(value: &Value) -> Vec<Segment> {
    coerce_text(value)
        .map(|text| segment(&text))
        .unwrap_or_default()
}

/// Coerces a record value to display text.
///
/// Falsy values (`null`, `false`, `0`, empty strings and empty containers)
/// have no text. `true` renders as `True`, numbers in their JSON form, and
/// non-empty containers as compact JSON.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(false) => None,
        Value::Bool(true) => Some("True".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => serde_json::to_string(other).ok(),
    }
}

/// Removes every `<...>` tag from `text` without interpreting it.
pub fn strip_tags(text: &str) -> String {
    ANY_TAG.replace_all(text, "").into_owned()
}

/// Concatenates segment text, ignoring the bold flag.
#[cfg(test)]
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

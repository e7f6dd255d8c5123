// src/sanitize/mod.rs
#![allow(dead_code)] // `sanitize` is a public entry point alongside the parser

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// --- Regex Patterns (Lazy Static) ---
static DASH_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"-{3,}").expect("Failed to compile DASH_RUN_RE")
});

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Failed to compile WHITESPACE_RUN_RE")
});

// Characters trimmed from both ends of every sanitized string.
const BORDER_CHARS: &[char] = &[' ', '-', '\n', '\t', '\r'];

/// Normalizes a single string leaf: removes separator artifacts (runs of 3+
/// dashes), collapses internal whitespace to single spaces, and trims
/// decorative border characters from both ends.
pub fn clean_text(text: &str) -> String {
    let no_dashes = DASH_RUN_RE.replace_all(text, "");
    let collapsed = WHITESPACE_RUN_RE.replace_all(&no_dashes, " ");
    collapsed.trim_matches(BORDER_CHARS).to_string()
}

/// Cleans every element of a list and drops elements that clean to empty,
/// preserving the relative order of survivors.
pub fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| clean_text(&item))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Trims every key and cleans every value of an ordered mapping. Entries
/// whose value cleans to empty are kept: only lists prune their elements.
pub fn clean_mapping(map: IndexMap<String, String>) -> IndexMap<String, String> {
    map.into_iter()
        .map(|(key, value)| (key.trim().to_string(), clean_text(&value)))
        .collect()
}

/// Recursively sanitizes an arbitrary JSON-like value.
///
/// Strings are normalized via [`clean_text`]. Arrays sanitize each element
/// and then drop any element that is falsy (empty string, empty array, empty
/// object). Objects trim their keys and sanitize their values but never drop
/// entries, so `{"a": ""}` survives inside an object while `""` would be
/// pruned from an array. Any other scalar (number, boolean, null) passes
/// through unchanged. The transform is idempotent.
pub fn sanitize(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(clean_text(&s)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(sanitize)
                .filter(|item| !is_falsy(item))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, val)| (key.trim().to_string(), sanitize(val)))
                .collect(),
        ),
        other => other,
    }
}

/// An element is falsy when it is an empty string, empty array, or empty
/// object. Non-string scalars are never falsy here.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

// src/extractors/entities.rs

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::lists;

// --- Regex Patterns (Lazy Static) ---
// One "- key: value" line; the key may not contain a colon or span lines.
static KEY_VALUE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"-\s*([^:\n]+):\s*([^\n]+)").expect("Failed to compile KEY_VALUE_LINE_RE")
});

const BOLD_MARKER: &str = "**";
const HEADING_MARKER: &str = "###";

/// Extracts `**Key** value` entities from a text block into an ordered
/// mapping.
///
/// The value run is the span from the closing `**` of the key to the next
/// `**`, the next `###`, or end of block, with newlines flattened and
/// whitespace runs collapsed. Keys are trimmed and trailing colons stripped;
/// entities with an empty key are discarded. A later duplicate key
/// overwrites the earlier value (last-wins).
///
/// Implemented as a single forward scan over the `**` delimiters rather than
/// a backtracking pattern, so pathological delimiter-sparse input stays
/// linear.
pub fn bold_entities(block: &str) -> IndexMap<String, String> {
    let mut entities = IndexMap::new();
    let mut cursor = 0;

    while let Some(open) = block[cursor..].find(BOLD_MARKER) {
        let key_start = cursor + open + BOLD_MARKER.len();
        let Some(close) = block[key_start..].find(BOLD_MARKER) else {
            break; // Unclosed marker: no further entities.
        };
        let key_end = key_start + close;
        let value_start = key_end + BOLD_MARKER.len();

        // Value runs to the nearest of: next bold marker, next heading, end.
        let tail = &block[value_start..];
        let boundary = [tail.find(BOLD_MARKER), tail.find(HEADING_MARKER)]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(tail.len());
        let value_end = value_start + boundary;

        let key = block[key_start..key_end].trim().trim_end_matches(':');
        let value = lists::collapse_whitespace(&block[value_start..value_end].replace('\n', " "));
        if !key.is_empty() {
            entities.insert(key.to_string(), value);
        }
        cursor = value_end;
    }

    entities
}

/// Extracts `- key: value` lines from a block into an ordered mapping, both
/// sides trimmed. Lines without the exact single-colon shape are ignored;
/// duplicate keys are last-wins.
pub fn key_value_lines(block: &str) -> IndexMap<String, String> {
    let mut pairs = IndexMap::new();
    for caps in KEY_VALUE_LINE_RE.captures_iter(block) {
        let key = caps[1].trim().to_string();
        let value = caps[2].trim().to_string();
        pairs.insert(key, value);
    }
    pairs
}

// src/extractors/table.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// --- Regex Patterns (Lazy Static) ---
// One run of exactly five pipe-delimited cells. Applied as a global scan over
// the whole block rather than per line, so a row embedded without line breaks
// still matches; cells may span newlines.
static TABLE_ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\|\s*([^|]+)\s*\|\s*([^|]+)\s*\|\s*([^|]+)\s*\|\s*([^|]+)\s*\|\s*([^|]+)\s*\|")
        .expect("Failed to compile TABLE_ROW_RE")
});

/// One record of the tabular mapping: a single lab value, its status, a
/// narrative insight, and its reference range, all as free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BiomarkerRow {
    pub biomarker: String,
    pub value: String,
    pub status: String,
    pub insight: String,
    pub reference_range: String,
}

impl BiomarkerRow {
    fn cells(&self) -> [&str; 5] {
        [
            &self.biomarker,
            &self.value,
            &self.status,
            &self.insight,
            &self.reference_range,
        ]
    }
}

/// Extracts every five-cell pipe row from a block, trimmed, in scan order.
///
/// A row is dropped when all five trimmed cells are empty, or when no cell
/// contains an ASCII alphanumeric character (pure markdown separator
/// decoration such as `:---`). A literal header row ("Biomarker | Value |
/// ...") satisfies neither drop rule and is emitted as data.
pub fn table_rows(block: &str) -> Vec<BiomarkerRow> {
    TABLE_ROW_RE
        .captures_iter(block)
        .map(|caps| BiomarkerRow {
            biomarker: caps[1].trim().to_string(),
            value: caps[2].trim().to_string(),
            status: caps[3].trim().to_string(),
            insight: caps[4].trim().to_string(),
            reference_range: caps[5].trim().to_string(),
        })
        .filter(|row| {
            let cells = row.cells();
            let all_empty = cells.iter().all(|cell| cell.is_empty());
            let all_decoration = cells.iter().all(|cell| !has_alphanumeric(cell));
            !all_empty && !all_decoration
        })
        .collect()
}

fn has_alphanumeric(cell: &str) -> bool {
    cell.chars().any(|c| c.is_ascii_alphanumeric())
}

// src/extractors/section.rs

use once_cell::sync::Lazy;
use regex::Regex;

// --- Heading Patterns (Lazy Static) ---
// Case-insensitive, whitespace-tolerant matches for the six fixed headings.
static EXEC_SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)###\s*Executive\s+Summary").expect("Failed to compile EXEC_SUMMARY_RE")
});
static SYSTEM_ANALYSIS_RE: Lazy<Regex> = Lazy::new(|| {
    // Accepts both "System-Specific" and "System Specific".
    Regex::new(r"(?i)###\s*System[- ]Specific\s+Analysis")
        .expect("Failed to compile SYSTEM_ANALYSIS_RE")
});
static ACTION_PLAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)###\s*Personalized\s+Action\s+Plan")
        .expect("Failed to compile ACTION_PLAN_RE")
});
static INTERACTION_ALERTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)###\s*Interaction\s+Alerts").expect("Failed to compile INTERACTION_ALERTS_RE")
});
static NORMAL_RANGES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)###\s*Normal\s+Ranges").expect("Failed to compile NORMAL_RANGES_RE")
});
static TABULAR_MAPPING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)###\s*Tabular\s+Mapping").expect("Failed to compile TABULAR_MAPPING_RE")
});

/// The six named report subsections a generator response may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ExecutiveSummary,
    SystemAnalysis,
    ActionPlan,
    InteractionAlerts,
    NormalRanges,
    TabularMapping,
}

impl Section {
    fn heading_re(self) -> &'static Regex {
        match self {
            Section::ExecutiveSummary => &EXEC_SUMMARY_RE,
            Section::SystemAnalysis => &SYSTEM_ANALYSIS_RE,
            Section::ActionPlan => &ACTION_PLAN_RE,
            Section::InteractionAlerts => &INTERACTION_ALERTS_RE,
            Section::NormalRanges => &NORMAL_RANGES_RE,
            Section::TabularMapping => &TABULAR_MAPPING_RE,
        }
    }
}

/// Slices out the body of a named section: everything strictly between the
/// heading and the next `###`-prefixed heading, or end of text. The Tabular
/// Mapping section is typically last, so its body runs to end of text
/// regardless of later `###` markers. Returns `None` when the heading is
/// absent; callers treat that as "use the field default", never as an error.
pub fn body(text: &str, section: Section) -> Option<&str> {
    let found = section.heading_re().find(text)?;
    let rest = &text[found.end()..];
    if section == Section::TabularMapping {
        return Some(rest);
    }
    match rest.find("###") {
        Some(next_heading) => Some(&rest[..next_heading]),
        None => Some(rest),
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "### Executive Summary\nSummary body.\n\
                          ### Interaction Alerts\n- none\n\
                          ### Normal Ranges\n- Urea: 17–43\n";

    #[test]
    fn body_stops_at_next_heading() {
        let block = body(REPORT, Section::ExecutiveSummary).unwrap();
        assert_eq!(block.trim(), "Summary body.");
        assert!(!block.contains("Interaction"));
    }

    #[test]
    fn last_section_runs_to_end_of_text() {
        let block = body(REPORT, Section::NormalRanges).unwrap();
        assert_eq!(block.trim(), "- Urea: 17–43");
    }

    #[test]
    fn heading_match_is_case_insensitive() {
        let text = "###  executive summary\nbody\n";
        assert!(body(text, Section::ExecutiveSummary).is_some());
    }

    #[test]
    fn system_specific_allows_variant_spelling() {
        assert!(body("### System-Specific Analysis\nx", Section::SystemAnalysis).is_some());
        assert!(body("### System Specific Analysis\nx", Section::SystemAnalysis).is_some());
    }

    #[test]
    fn missing_heading_yields_none() {
        assert!(body(REPORT, Section::TabularMapping).is_none());
        assert!(body("", Section::ExecutiveSummary).is_none());
    }

    #[test]
    fn tabular_mapping_body_spans_trailing_headings() {
        let text = "### Tabular Mapping\n| a | b | c | d | e |\n### Footnote\nmore";
        let block = body(text, Section::TabularMapping).unwrap();
        assert!(block.contains("Footnote"));
    }
}

// src/extractors/report.rs

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extractors::section::{self, Section};
use crate::extractors::table::BiomarkerRow;
use crate::extractors::{entities, lists, table};
use crate::sanitize;

// --- Regex Patterns (Lazy Static) ---
static KEY_STRENGTHS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*Key Strengths:\*\*").expect("Failed to compile KEY_STRENGTHS_RE")
});

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExecutiveSummary {
    pub top_priorities: Vec<String>,
    pub key_strengths: Vec<String>,
}

/// The structured form of one generator response. Every field defaults to an
/// empty container when its heading is missing from the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReportDocument {
    pub executive_summary: ExecutiveSummary,
    pub system_analysis: IndexMap<String, String>,
    pub personalized_action_plan: IndexMap<String, String>,
    pub interaction_alerts: Vec<String>,
    pub normal_ranges: IndexMap<String, String>,
    pub biomarker_table: Vec<BiomarkerRow>,
}

/// Parses a raw generator response into a sanitized [`ReportDocument`].
///
/// Each section is located independently; a missing heading yields that
/// field's default and never blocks the others. This function does not fail:
/// arbitrarily malformed input produces an (possibly empty) document.
pub fn parse(text: &str) -> ReportDocument {
    let document = assemble(text);
    tracing::debug!(
        priorities = document.executive_summary.top_priorities.len(),
        systems = document.system_analysis.len(),
        table_rows = document.biomarker_table.len(),
        "Assembled report document"
    );
    document.sanitized()
}

/// Routes each section body to its extractor and merges the results into the
/// fixed document shape, unsanitized.
fn assemble(text: &str) -> ReportDocument {
    let mut document = ReportDocument::default();

    if let Some(block) = section::body(text, Section::ExecutiveSummary) {
        document.executive_summary.top_priorities = lists::numbered_items(block);
        if let Some(marker) = KEY_STRENGTHS_RE.find(block) {
            document.executive_summary.key_strengths = lists::list_items(&block[marker.end()..]);
        }
    }
    if let Some(block) = section::body(text, Section::SystemAnalysis) {
        document.system_analysis = entities::bold_entities(block);
    }
    if let Some(block) = section::body(text, Section::ActionPlan) {
        document.personalized_action_plan = entities::bold_entities(block);
    }
    if let Some(block) = section::body(text, Section::InteractionAlerts) {
        document.interaction_alerts = lists::list_items(block);
    }
    if let Some(block) = section::body(text, Section::NormalRanges) {
        document.normal_ranges = entities::key_value_lines(block);
    }
    if let Some(block) = section::body(text, Section::TabularMapping) {
        document.biomarker_table = table::table_rows(block);
    }

    document
}

impl ReportDocument {
    /// Applies the recursive sanitizer field by field: lists prune elements
    /// that clean to empty, mappings keep empty values but trim keys. Table
    /// rows always survive since a row is a non-empty mapping even when
    /// every cell cleans to empty.
    fn sanitized(self) -> Self {
        Self {
            executive_summary: ExecutiveSummary {
                top_priorities: sanitize::clean_list(self.executive_summary.top_priorities),
                key_strengths: sanitize::clean_list(self.executive_summary.key_strengths),
            },
            system_analysis: sanitize::clean_mapping(self.system_analysis),
            personalized_action_plan: sanitize::clean_mapping(self.personalized_action_plan),
            interaction_alerts: sanitize::clean_list(self.interaction_alerts),
            normal_ranges: sanitize::clean_mapping(self.normal_ranges),
            biomarker_table: self
                .biomarker_table
                .into_iter()
                .map(|row| BiomarkerRow {
                    biomarker: sanitize::clean_text(&row.biomarker),
                    value: sanitize::clean_text(&row.value),
                    status: sanitize::clean_text(&row.status),
                    insight: sanitize::clean_text(&row.insight),
                    reference_range: sanitize::clean_text(&row.reference_range),
                })
                .collect(),
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_REPORT: &str = "\
------------------------------
### Executive Summary
**Top 3 Health Priorities:**
1. Improve sleep
2. Reduce sugar
3. ---- Increase daily movement ----

**Key Strengths:**
- Strong lipid profile
- Stable glucose control
------------------------------
### System-Specific Analysis

**Cardiovascular System**
Status: Normal.
Explanation: Lipid profile within reference ranges.

**Liver Function**
Status: Normal. Explanation: fine.
------------------------------
### Personalized Action Plan
**Nutrition:** Increase fiber intake.
**Lifestyle:** Walk 30 minutes daily.
------------------------------
### Interaction Alerts
- None identified at current values.
------------------------------
### Normal Ranges
# Kidney Function
- Urea (S): 17–43 mg/dL
- Creatinine (Women): 0.59–1.04 mg/dL
------------------------------
### Tabular Mapping
| Biomarker | Value | Status | Insight | Reference Range |
| --- | --- | --- | --- | --- |
| Albumin | 4.2 | Normal | ok | 3.5–5.0 g/dL |
| | | | | |
------------------------------
";

    #[test]
    fn empty_input_yields_all_defaults() {
        assert_eq!(parse(""), ReportDocument::default());
    }

    #[test]
    fn full_report_parses_into_expected_document() {
        let document = parse(SAMPLE_REPORT);

        assert_eq!(
            document.executive_summary.top_priorities,
            vec!["Improve sleep", "Reduce sugar", "Increase daily movement"]
        );
        assert_eq!(
            document.executive_summary.key_strengths,
            vec!["Strong lipid profile", "Stable glucose control"]
        );

        assert_eq!(
            document.system_analysis.get("Liver Function").map(String::as_str),
            Some("Status: Normal. Explanation: fine.")
        );
        assert_eq!(
            document.personalized_action_plan.get("Lifestyle").map(String::as_str),
            Some("Walk 30 minutes daily.")
        );
        assert_eq!(document.interaction_alerts, vec!["None identified at current values."]);
        assert_eq!(
            document.normal_ranges.get("Urea (S)").map(String::as_str),
            Some("17–43 mg/dL")
        );

        // Header row leaks as data (inherited behavior); separator and
        // all-empty rows are dropped.
        assert_eq!(document.biomarker_table.len(), 2);
        assert_eq!(document.biomarker_table[0].biomarker, "Biomarker");
        assert_eq!(document.biomarker_table[1].biomarker, "Albumin");
        assert_eq!(document.biomarker_table[1].reference_range, "3.5–5.0 g/dL");
    }

    #[test]
    fn section_order_in_input_does_not_matter() {
        let text = "### Interaction Alerts\n- watch caffeine\n### Executive Summary\n1. Hydrate\n";
        let document = parse(text);
        assert_eq!(document.interaction_alerts, vec!["watch caffeine"]);
        assert_eq!(document.executive_summary.top_priorities, vec!["Hydrate"]);
    }

    #[test]
    fn bolded_alert_line_keeps_no_emphasis_markers() {
        let text = "### Interaction Alerts\n- **None identified**\n";
        let document = parse(text);
        assert_eq!(document.interaction_alerts, vec!["None identified"]);
    }

    #[test]
    fn document_survives_json_round_trip() {
        let document = parse(SAMPLE_REPORT);
        let json = serde_json::to_string(&document).expect("serialize");
        let back: ReportDocument = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, document);
    }

    #[test]
    fn mapping_keys_preserve_document_order() {
        let document = parse(SAMPLE_REPORT);
        let keys: Vec<&str> = document.system_analysis.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Cardiovascular System", "Liver Function"]);
    }
}

// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::extractors::report::ReportDocument;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self {
            base_dir: base_path,
        })
    }

    /// Saves the parsed report document as pretty-printed JSON
    pub fn save_report(
        &self,
        document: &ReportDocument,
        patient_id: &str,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_report.json", patient_id));

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved report to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about the parsed report in JSON format
    pub fn save_report_metadata(
        &self,
        document: &ReportDocument,
        patient_id: &str,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self
            .base_dir
            .join(format!("{}_report_meta.json", patient_id));

        let metadata = serde_json::json!({
            "patient_id": patient_id,
            "top_priorities": document.executive_summary.top_priorities.len(),
            "key_strengths": document.executive_summary.key_strengths.len(),
            "systems_analyzed": document.system_analysis.len(),
            "action_plan_entries": document.personalized_action_plan.len(),
            "interaction_alerts": document.interaction_alerts.len(),
            "normal_ranges": document.normal_ranges.len(),
            "biomarker_rows": document.biomarker_table.len(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}

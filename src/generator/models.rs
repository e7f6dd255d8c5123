// src/generator/models.rs
use serde::{Deserialize, Serialize};

/// The biomarker panel transmitted to the generator: patient info plus the
/// lab values the prompt reports on. Deserialized from a JSON file where
/// every field is optional; missing fields fall back to the defaults below,
/// so `{}` is a valid (reference) panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomarkerPanel {
    // --- Patient Info ---
    pub id: String,
    pub age: u32,
    pub gender: String,
    pub height: f64, // cm
    pub weight: f64, // kg

    // --- Metabolic & Glycemic Control ---
    pub fasting_blood_sugar: f64, // mg/dL
    pub hba1c: f64,               // %
    pub insulin: f64,             // µIU/mL
    pub c_peptide: f64,           // ng/mL
    pub homa_ir: f64,
    pub leptin: f64, // ng/mL

    // --- Cardiovascular System ---
    pub total_cholesterol: f64, // mg/dL
    pub ldl: f64,               // mg/dL
    pub hdl: f64,               // mg/dL
    pub triglycerides: f64,     // mg/dL
    pub apo_b: f64,             // mg/dL
    pub cholesterol_hdl_ratio: f64,
    pub hs_crp: f64,       // mg/L
    pub homocysteine: f64, // µmol/L

    // --- Liver Function ---
    pub alt: f64,             // U/L
    pub ast: f64,             // U/L
    pub ggt: f64,             // U/L
    pub total_bilirubin: f64, // mg/dL
    pub total_protein: f64,   // g/dL

    // --- Renal Function ---
    pub creatinine: f64, // mg/dL
    pub egfr: f64,       // mL/min/1.73m²
    pub uric_acid: f64,  // mg/dL

    // --- Vitamins & Minerals ---
    pub vitamin_d: f64,   // ng/mL
    pub vitamin_b12: f64, // pg/mL
    pub iron: f64,        // µg/dL
    pub zinc: f64,        // µg/dL

    // --- Thyroid Function ---
    pub tsh: f64,     // µIU/mL
    pub free_t3: f64, // pg/mL
    pub free_t4: f64, // ng/dL

    // --- Sex Hormones & Reproductive Health ---
    pub total_testosterone: f64, // ng/dL
    pub free_testosterone: f64,  // pg/mL
    pub estrogen: f64,           // pg/mL
    pub shbg: f64,               // nmol/L

    // --- Adrenal & Stress Hormones ---
    pub cortisol: f64, // µg/dL
    pub dhea_s: f64,   // µg/dL

    // --- Autoimmune / Inflammatory Markers ---
    pub anti_ccp: f64, // U/mL
}

impl Default for BiomarkerPanel {
    fn default() -> Self {
        Self {
            id: "PT01".to_string(),
            age: 52,
            gender: "female".to_string(),
            height: 165.0,
            weight: 70.0,

            fasting_blood_sugar: 85.0,
            hba1c: 5.4,
            insulin: 10.0,
            c_peptide: 1.2,
            homa_ir: 1.2,
            leptin: 10.0,

            total_cholesterol: 180.0,
            ldl: 90.0,
            hdl: 50.0,
            triglycerides: 120.0,
            apo_b: 70.0,
            cholesterol_hdl_ratio: 3.0,
            hs_crp: 1.0,
            homocysteine: 10.0,

            alt: 25.0,
            ast: 24.0,
            ggt: 20.0,
            total_bilirubin: 0.7,
            total_protein: 7.0,

            creatinine: 1.0,
            egfr: 100.0,
            uric_acid: 5.0,

            vitamin_d: 35.0,
            vitamin_b12: 500.0,
            iron: 100.0,
            zinc: 90.0,

            tsh: 2.0,
            free_t3: 3.2,
            free_t4: 1.2,

            total_testosterone: 450.0,
            free_testosterone: 15.0,
            estrogen: 60.0,
            shbg: 40.0,

            cortisol: 12.0,
            dhea_s: 250.0,

            anti_ccp: 10.0,
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_reference_defaults() {
        let panel: BiomarkerPanel = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(panel.id, "PT01");
        assert_eq!(panel.age, 52);
        assert_eq!(panel.tsh, 2.0);
    }

    #[test]
    fn provided_fields_override_defaults() {
        let panel: BiomarkerPanel =
            serde_json::from_str(r#"{"id": "PT99", "creatinine": 1.8}"#).expect("deserialize");
        assert_eq!(panel.id, "PT99");
        assert_eq!(panel.creatinine, 1.8);
        // Untouched fields keep their defaults.
        assert_eq!(panel.egfr, 100.0);
    }
}

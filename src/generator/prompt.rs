// src/generator/prompt.rs
use crate::generator::models::BiomarkerPanel;

// The layout instructions sent ahead of the panel values. The parser in
// `extractors` is written against exactly this structure, but tolerates the
// generator deviating from it.
const REPORT_FORMAT: &str = r#"
You are an advanced **Medical Insight Generation AI** trained to analyze **biomarkers and lab results**.

IMPORTANT — OUTPUT FORMAT INSTRUCTIONS:
Return your report in this strict markdown structure.

------------------------------
### Executive Summary
**Top 3 Health Priorities:**
1. ...
2. ...
3. ...
make it more detailed

**Key Strengths:**
- ...
- ...
make it detailed
------------------------------
### System-Specific Analysis

**Cardiovascular System**
Status: ... Explanation: ...

**Metabolic & Glycemic Control**
Status: ... Explanation: ...

**Liver Function**
Status: ... Explanation: ...

**Renal Function**
Status: ... Explanation: ...

**Thyroid Function**
Status: ... Explanation: ...

**Sex Hormones & Reproductive Health**
Status: ... Explanation: ...

**Vitamins & Minerals**
Status: ... Explanation: ...
------------------------------
### Personalized Action Plan
**Nutrition:** ...
make it detailed
**Lifestyle:** ...
make it detailed
**Testing:** ...
make it detailed
**Medical Consultation:** ...
make it detailed
------------------------------
### Interaction Alerts
- ...
- ...
make it detailed
------------------------------
### Normal Ranges
# Kidney Function
- Urea (S): 17–43 mg/dL
- Creatinine (Men): 0.74–1.35 mg/dL
- Creatinine (Women): 0.59–1.04 mg/dL
- eGFR: ≥90 mL/min/1.73m²
- Uric Acid (Men): 3.4–7.0 mg/dL
- Uric Acid (Women): 2.4–6.0 mg/dL

# Diabetic Profile
- Fasting Blood Sugar: 70–99 mg/dL
- HbA1c: <5.7 %
- Insulin: 2–20 µIU/mL
- C-Peptide: 0.5–2.0 ng/mL
- HOMA-IR: <1 Optimal, 1–2 Normal, >2 Insulin Resistance

# Lipid Profile
- Total Cholesterol: <200 mg/dL
- LDL: <100 mg/dL
- HDL (Men): ≥40 mg/dL
- HDL (Women): ≥50 mg/dL
- Triglycerides: <150 mg/dL
- Apo B: <90 mg/dL
- Cholesterol/HDL Ratio: <3.5 Optimal

# Liver Function
- Albumin: 3.5–5.0 g/dL
- Total Protein: 6.0–8.3 g/dL
- ALT: 10–40 U/L
- AST: 10–40 U/L
- GGT: 8–61 U/L
- Total Bilirubin: 0.1–1.2 mg/dL

# Vitamins & Minerals
- Vitamin D: 30–60 ng/mL
- Vitamin B12: 200–900 pg/mL
- Iron (Men): 60–170 µg/dL
- Iron (Women): 50–170 µg/dL
- Zinc: 70–120 µg/dL

# Thyroid
- TSH: 0.4–4.0 µIU/mL
- Free T3: 2.0–4.4 pg/mL
- Free T4: 0.8–1.8 ng/dL

# Hormones
- Total Testosterone (Men): 300–1000 ng/dL
- Total Testosterone (Women): 15–70 ng/dL
- Free Testosterone (Men): 5–21 pg/mL
- Free Testosterone (Women): 0.5–4.2 pg/mL
- SHBG (Men): 10–57 nmol/L
- SHBG (Women): 18–144 nmol/L
- Cortisol (AM): 6–23 µg/dL
- DHEA-S (Men): 280–640 µg/dL
- DHEA-S (Women): 65–380 µg/dL
------------------------------
### Tabular Mapping
| Biomarker | Value | Status | Insight | Reference Range |
| Albumin | X | Normal | ... | 3.5–5.0 g/dL |
| Creatinine | X | High | ... | 0.7–1.3 mg/dL |
| Glucose | X | ... | ... | 70–100 mg/dL |
------------------------------
"#;

/// Renders the full prompt: the layout instructions followed by the panel
/// values, grouped the same way the report sections group them.
pub fn build_prompt(panel: &BiomarkerPanel) -> String {
    format!("{}\n\n{}", REPORT_FORMAT, render_panel(panel))
}

fn render_panel(panel: &BiomarkerPanel) -> String {
    format!(
        "\
**Patient Info**
- Id: {id}
- Age: {age}
- Gender: {gender}
- Height: {height} cm
- Weight: {weight} kg

**Metabolic & Glycemic Control**
- Fasting Blood Sugar: {fbs} mg/dL
- HbA1c: {hba1c} %
- Insulin: {insulin} µIU/mL
- C-Peptide: {c_peptide} ng/mL
- HOMA-IR: {homa_ir}
- Leptin: {leptin} ng/mL

**Cardiovascular System**
- Total Cholesterol: {chol} mg/dL
- LDL: {ldl} mg/dL
- HDL: {hdl} mg/dL
- Triglycerides: {trig} mg/dL
- ApoB: {apo_b} mg/dL
- Cholesterol/HDL Ratio: {chol_ratio}
- hs-CRP: {hs_crp} mg/L
- Homocysteine: {homocysteine} µmol/L

**Liver Function**
- ALT: {alt} U/L
- AST: {ast} U/L
- GGT: {ggt} U/L
- Total Bilirubin: {tbili} mg/dL
- Total Protein: {tprot} g/dL

**Renal Function**
- Creatinine: {creatinine} mg/dL
- eGFR: {egfr} mL/min/1.73m2
- Uric Acid: {uric} mg/dL

**Vitamins & Minerals**
- Vitamin D: {vit_d} ng/mL
- Vitamin B12: {vit_b12} pg/mL
- Iron: {iron} µg/dL
- Zinc: {zinc} µg/dL

**Thyroid Function**
- TSH: {tsh} µIU/mL
- Free T3: {free_t3} pg/mL
- Free T4: {free_t4} ng/dL

**Sex Hormones & Reproductive Health**
- Total Testosterone: {tt} ng/dL
- Free Testosterone: {ft} pg/mL
- Estrogen (Estradiol): {estrogen} pg/mL
- SHBG: {shbg} nmol/L

**Adrenal & Stress Hormones**
- Cortisol: {cortisol} µg/dL
- DHEA-S: {dhea_s} µg/dL

**Autoimmune / Inflammatory Markers**
- Anti-CCP: {anti_ccp} U/mL
",
        id = panel.id,
        age = panel.age,
        gender = panel.gender,
        height = panel.height,
        weight = panel.weight,
        fbs = panel.fasting_blood_sugar,
        hba1c = panel.hba1c,
        insulin = panel.insulin,
        c_peptide = panel.c_peptide,
        homa_ir = panel.homa_ir,
        leptin = panel.leptin,
        chol = panel.total_cholesterol,
        ldl = panel.ldl,
        hdl = panel.hdl,
        trig = panel.triglycerides,
        apo_b = panel.apo_b,
        chol_ratio = panel.cholesterol_hdl_ratio,
        hs_crp = panel.hs_crp,
        homocysteine = panel.homocysteine,
        alt = panel.alt,
        ast = panel.ast,
        ggt = panel.ggt,
        tbili = panel.total_bilirubin,
        tprot = panel.total_protein,
        creatinine = panel.creatinine,
        egfr = panel.egfr,
        uric = panel.uric_acid,
        vit_d = panel.vitamin_d,
        vit_b12 = panel.vitamin_b12,
        iron = panel.iron,
        zinc = panel.zinc,
        tsh = panel.tsh,
        free_t3 = panel.free_t3,
        free_t4 = panel.free_t4,
        tt = panel.total_testosterone,
        ft = panel.free_testosterone,
        estrogen = panel.estrogen,
        shbg = panel.shbg,
        cortisol = panel.cortisol,
        dhea_s = panel.dhea_s,
        anti_ccp = panel.anti_ccp,
    )
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_all_six_section_headings() {
        let prompt = build_prompt(&BiomarkerPanel::default());
        for heading in [
            "### Executive Summary",
            "### System-Specific Analysis",
            "### Personalized Action Plan",
            "### Interaction Alerts",
            "### Normal Ranges",
            "### Tabular Mapping",
        ] {
            assert!(prompt.contains(heading), "missing heading: {}", heading);
        }
    }

    #[test]
    fn prompt_carries_panel_values() {
        let panel = BiomarkerPanel {
            id: "PT42".to_string(),
            creatinine: 1.8,
            ..Default::default()
        };
        let prompt = build_prompt(&panel);
        assert!(prompt.contains("- Id: PT42"));
        assert!(prompt.contains("- Creatinine: 1.8 mg/dL"));
    }
}

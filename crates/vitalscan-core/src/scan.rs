//! Scan results.
//!
//! A scan is a single health-data capture (audio, image or manual vitals entry) that has been
//! interpreted into a diagnosis or summary. Each scan kind carries only its own fields and is
//! tagged on the wire by `scanType`:
//!
//! ```json
//! { "scanType": "cardiac", "diagnosis": "Arrhythmia (AFib)", "heartRate": 128, "urgency": "High" }
//! ```

use crate::conditions::ConditionsInput;
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use vitalscan_types::Urgency;

/// An interpreted scan, one variant per scan kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "scanType",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum ScanResult {
    /// Heart sound recording.
    Cardiac {
        diagnosis: String,
        #[serde(default)]
        heart_rate: Option<u32>,
        #[serde(default, deserialize_with = "lenient_urgency")]
        urgency: Option<Urgency>,
    },
    /// Skin image.
    Skin {
        diagnosis: String,
        #[serde(default)]
        confidence: Option<f64>,
        #[serde(default, deserialize_with = "lenient_urgency")]
        urgency: Option<Urgency>,
    },
    /// Eye image.
    Eye {
        diagnosis: String,
        #[serde(default)]
        confidence: Option<f64>,
        #[serde(default, deserialize_with = "lenient_urgency")]
        urgency: Option<Urgency>,
    },
    /// Manually entered vital signs with interpreted findings.
    Vitals {
        #[serde(default)]
        heart_rate: Option<u32>,
        #[serde(default)]
        systolic: Option<u32>,
        #[serde(default)]
        diastolic: Option<u32>,
        #[serde(default)]
        oxygen_saturation: Option<f64>,
        #[serde(default)]
        temperature: Option<f64>,
        #[serde(default)]
        findings: Vec<String>,
        #[serde(default, deserialize_with = "lenient_urgency")]
        urgency: Option<Urgency>,
    },
    /// Free-text symptom check.
    Symptom {
        #[serde(default)]
        symptoms: Vec<String>,
        #[serde(default, deserialize_with = "lenient_urgency")]
        urgency: Option<Urgency>,
    },
    /// Uploaded medical report.
    MedicalReport {
        #[serde(default)]
        conditions: Vec<String>,
        #[serde(default)]
        summary: Option<String>,
        #[serde(default, deserialize_with = "lenient_urgency")]
        urgency: Option<Urgency>,
    },
}

impl ScanResult {
    /// Wire name of the scan kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ScanResult::Cardiac { .. } => "cardiac",
            ScanResult::Skin { .. } => "skin",
            ScanResult::Eye { .. } => "eye",
            ScanResult::Vitals { .. } => "vitals",
            ScanResult::Symptom { .. } => "symptom",
            ScanResult::MedicalReport { .. } => "medical_report",
        }
    }

    /// The condition labels this scan contributes to a doctor recommendation.
    pub fn conditions(&self) -> ConditionsInput {
        match self {
            ScanResult::Cardiac { diagnosis, .. }
            | ScanResult::Skin { diagnosis, .. }
            | ScanResult::Eye { diagnosis, .. } => ConditionsInput::One(diagnosis.clone()),
            ScanResult::Vitals { findings, .. } => ConditionsInput::from(findings.clone()),
            ScanResult::Symptom { symptoms, .. } => ConditionsInput::from(symptoms.clone()),
            ScanResult::MedicalReport { conditions, .. } => {
                ConditionsInput::from(conditions.clone())
            }
        }
    }

    pub fn urgency(&self) -> Option<Urgency> {
        match self {
            ScanResult::Cardiac { urgency, .. }
            | ScanResult::Skin { urgency, .. }
            | ScanResult::Eye { urgency, .. }
            | ScanResult::Vitals { urgency, .. }
            | ScanResult::Symptom { urgency, .. }
            | ScanResult::MedicalReport { urgency, .. } => *urgency,
        }
    }

    pub fn parse_json(text: &str) -> CoreResult<Self> {
        serde_json::from_str(text).map_err(CoreError::ScanJson)
    }

    pub fn parse_yaml(text: &str) -> CoreResult<Self> {
        serde_yaml::from_str(text).map_err(CoreError::ScanYaml)
    }

    /// Read a scan result file. `.json` files are parsed as JSON, anything else as YAML.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path).map_err(CoreError::FileRead)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&text)
        } else {
            Self::parse_yaml(&text)
        }
    }
}

/// Urgency labels from callers: only the exact labels resolve; anything else means "no urgency".
fn lenient_urgency<'de, D>(deserializer: D) -> Result<Option<Urgency>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Urgency::from_label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::normalise_conditions;
    use std::io::Write;

    #[test]
    fn parses_cardiac_scan() {
        let scan = ScanResult::parse_json(
            r#"{"scanType":"cardiac","diagnosis":"Arrhythmia (AFib)","heartRate":128,"urgency":"High"}"#,
        )
        .expect("cardiac scan");

        assert_eq!(scan.kind(), "cardiac");
        assert_eq!(scan.urgency(), Some(Urgency::High));
        assert_eq!(
            scan.conditions(),
            ConditionsInput::One("Arrhythmia (AFib)".into())
        );
    }

    #[test]
    fn parses_medical_report_yaml() {
        let scan = ScanResult::parse_yaml(
            r#"scanType: medical_report
conditions:
  - Hypertension
  - Type 2 Diabetes
summary: Annual review
urgency: Medium
"#,
        )
        .expect("report scan");

        assert_eq!(scan.kind(), "medical_report");
        assert_eq!(scan.urgency(), Some(Urgency::Medium));
        assert_eq!(
            normalise_conditions(Some(&scan.conditions())),
            vec!["hypertension", "type 2 diabetes"]
        );
    }

    #[test]
    fn vitals_contribute_findings() {
        let scan = ScanResult::parse_json(
            r#"{"scanType":"vitals","systolic":165,"diastolic":100,"findings":["Hypertension"]}"#,
        )
        .expect("vitals scan");

        assert_eq!(scan.urgency(), None);
        assert_eq!(
            normalise_conditions(Some(&scan.conditions())),
            vec!["hypertension"]
        );
    }

    #[test]
    fn symptom_scan_without_symptoms_has_no_conditions() {
        let scan =
            ScanResult::parse_json(r#"{"scanType":"symptom","urgency":""}"#).expect("symptom");
        assert_eq!(scan.urgency(), None);
        assert!(normalise_conditions(Some(&scan.conditions())).is_empty());
    }

    #[test]
    fn rejects_unknown_scan_type() {
        let err = ScanResult::parse_json(r#"{"scanType":"dental","diagnosis":"Caries"}"#)
            .expect_err("unknown scan type");
        assert!(matches!(err, CoreError::ScanJson(_)));
    }

    #[test]
    fn unrecognised_urgency_labels_mean_no_urgency() {
        for label in ["Critical", "low", "HIGH", " Medium"] {
            let text = format!(
                r#"{{"scanType":"skin","diagnosis":"Melanoma","urgency":"{label}"}}"#
            );
            let scan = ScanResult::parse_json(&text).expect("scan with odd urgency");
            assert_eq!(scan.urgency(), None, "label {label:?}");
        }
    }

    #[test]
    fn serialises_with_scan_type_tag() {
        let scan = ScanResult::Eye {
            diagnosis: "Glaucoma".into(),
            confidence: Some(0.82),
            urgency: Some(Urgency::Low),
        };
        let json = serde_json::to_value(&scan).expect("serialise");
        assert_eq!(json["scanType"], "eye");
        assert_eq!(json["urgency"], "Low");
    }

    #[test]
    fn load_picks_format_from_extension() {
        let temp = tempfile::TempDir::new().expect("temp dir");

        let json_path = temp.path().join("scan.json");
        std::fs::write(&json_path, r#"{"scanType":"skin","diagnosis":"Eczema"}"#)
            .expect("write json");
        let scan = ScanResult::load(&json_path).expect("json scan");
        assert_eq!(scan.kind(), "skin");

        let yaml_path = temp.path().join("scan.yaml");
        let mut file = std::fs::File::create(&yaml_path).expect("create yaml");
        writeln!(file, "scanType: eye\ndiagnosis: Cataract").expect("write yaml");
        let scan = ScanResult::load(&yaml_path).expect("yaml scan");
        assert_eq!(scan.kind(), "eye");
    }
}

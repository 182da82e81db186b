//! Normalisation of free-text condition input.
//!
//! Callers hand over conditions in whatever shape they have: a single diagnosis string, a list
//! of symptom descriptions (possibly with holes), or nothing at all. Everything is reduced to a
//! list of lower-cased, trimmed, non-empty strings before scoring.

use serde::{Deserialize, Serialize};

/// Condition input as received from callers: one string or a list of strings.
///
/// The absent case is `Option::None` at the use site. List entries may be `null` on the wire;
/// they are dropped during normalisation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionsInput {
    One(String),
    Many(Vec<Option<String>>),
}

impl From<&str> for ConditionsInput {
    fn from(value: &str) -> Self {
        ConditionsInput::One(value.to_owned())
    }
}

impl From<String> for ConditionsInput {
    fn from(value: String) -> Self {
        ConditionsInput::One(value)
    }
}

impl From<Vec<String>> for ConditionsInput {
    fn from(values: Vec<String>) -> Self {
        ConditionsInput::Many(values.into_iter().map(Some).collect())
    }
}

impl From<&[&str]> for ConditionsInput {
    fn from(values: &[&str]) -> Self {
        ConditionsInput::Many(values.iter().map(|s| Some((*s).to_owned())).collect())
    }
}

/// Lower-case and trim every condition, dropping entries that end up empty.
pub fn normalise_conditions(input: Option<&ConditionsInput>) -> Vec<String> {
    let raw: Vec<&str> = match input {
        None => Vec::new(),
        Some(ConditionsInput::One(s)) => vec![s.as_str()],
        Some(ConditionsInput::Many(items)) => items.iter().flatten().map(String::as_str).collect(),
    };

    raw.into_iter()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_input_is_empty() {
        assert!(normalise_conditions(None).is_empty());
    }

    #[test]
    fn single_string_is_wrapped() {
        let input = ConditionsInput::from("  Arrhythmia (AFib) ");
        assert_eq!(normalise_conditions(Some(&input)), vec!["arrhythmia (afib)"]);
    }

    #[test]
    fn empty_single_string_is_dropped() {
        let input = ConditionsInput::from("");
        assert!(normalise_conditions(Some(&input)).is_empty());
    }

    #[test]
    fn blank_and_null_entries_are_dropped() {
        let input = ConditionsInput::Many(vec![
            Some("Eczema".into()),
            None,
            Some("   ".into()),
            Some("".into()),
            Some(" ACNE".into()),
        ]);
        assert_eq!(normalise_conditions(Some(&input)), vec!["eczema", "acne"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let input = ConditionsInput::from(vec!["Asthma".to_string(), "asthma".to_string()]);
        assert_eq!(normalise_conditions(Some(&input)), vec!["asthma", "asthma"]);
    }

    #[test]
    fn deserialises_string_list_or_null_entries() {
        let one: ConditionsInput = serde_json::from_str(r#""Glaucoma""#).unwrap();
        assert_eq!(one, ConditionsInput::One("Glaucoma".into()));

        let many: ConditionsInput = serde_json::from_str(r#"["Glaucoma", null]"#).unwrap();
        assert_eq!(
            many,
            ConditionsInput::Many(vec![Some("Glaucoma".into()), None])
        );

        let absent: Option<ConditionsInput> = serde_json::from_str("null").unwrap();
        assert_eq!(absent, None);
    }
}

//! Validated primitive types shared across the VitalScan crates.

use std::str::FromStr;

/// The specialization label that marks a doctor as a general physician.
pub const GENERAL_PHYSICIAN: &str = "General Physician";

/// Errors that can occur when creating validated types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input did not name a known urgency level
    #[error("unknown urgency level: {0:?} (expected Low, Medium or High)")]
    UnknownUrgency(String),
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `Err(TypeError::Empty)` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TypeError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Coarse triage label attached to an interpreted scan result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    /// The canonical label, as stored in roster files and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }

    /// Resolve a request label to an urgency that can earn a match.
    ///
    /// Only the exact labels `Low`, `Medium` and `High` resolve; any other label (including
    /// other casings) is treated as "no urgency" rather than an error.
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = TypeError;

    /// Parses an exact urgency label (`Low`, `Medium` or `High`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Urgency::Low),
            "Medium" => Ok(Urgency::Medium),
            "High" => Ok(Urgency::High),
            _ => Err(TypeError::UnknownUrgency(s.to_owned())),
        }
    }
}

/// A doctor's specialization, e.g. "Cardiologist" or "General Physician".
///
/// The label is kept exactly as given (it is not trimmed), so the general physician check is a
/// strict comparison against the raw roster text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Specialization(String);

impl Specialization {
    /// # Errors
    ///
    /// Returns `Err(TypeError::Empty)` if the label is empty or only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TypeError> {
        let raw = input.as_ref();
        if raw.trim().is_empty() {
            return Err(TypeError::Empty);
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when this is exactly the general physician label (case- and whitespace-sensitive).
    pub fn is_general_physician(&self) -> bool {
        self.0 == GENERAL_PHYSICIAN
    }

    /// Case-insensitive comparison against a free-text specialty name.
    pub fn matches(&self, other: &str) -> bool {
        self.0.trim().eq_ignore_ascii_case(other.trim())
    }
}

impl std::fmt::Display for Specialization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Specialization {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Specialization::new(s).map_err(serde::de::Error::custom)
    }
}

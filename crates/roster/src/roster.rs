//! Roster parsing, rendering and the built-in sample roster.
//!
//! A roster file is a YAML mapping with a single `doctors` list:
//!
//! ```yaml
//! doctors:
//!   - id: d1
//!     name: Dr. Sarah Chen
//!     specialization: Cardiologist
//!     rating: 4.8
//!     reviews: 120
//!     urgencyMatch: [Medium, High]
//!     conditionsMatch: [Arrhythmia (AFib), Hypertension]
//! ```
//!
//! Entry order is preserved: it is the order general physicians are returned in when no
//! conditions are supplied.

use crate::doctor::{domain_to_wire, wire_to_domain, DoctorRecord, DoctorWire};
use crate::{RosterError, RosterResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const SAMPLE_ROSTER_YAML: &str = include_str!("../data/sample_roster.yaml");

/// An ordered, immutable list of doctor records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    doctors: Vec<DoctorRecord>,
}

impl Roster {
    /// Build a roster from domain records, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidInput`] if two records share an id.
    pub fn new(doctors: Vec<DoctorRecord>) -> RosterResult<Self> {
        let mut seen = HashSet::new();
        for doctor in &doctors {
            if !seen.insert(doctor.id.as_str()) {
                return Err(RosterError::InvalidInput(format!(
                    "duplicate doctor id: {}",
                    doctor.id
                )));
            }
        }
        Ok(Self { doctors })
    }

    /// Parse a roster from YAML text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort "path" (e.g. `doctors[2].rating`)
    /// to the failing field when the YAML does not match the wire schema.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if:
    /// - the YAML does not match the roster schema or contains unknown keys,
    /// - any entry fails validation (empty id, rating outside 0-5, unknown urgency),
    /// - two entries share an id.
    pub fn parse(yaml_text: &str) -> RosterResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, RosterWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(RosterError::Translation(format!(
                    "Roster schema mismatch at {path}: {source}"
                )));
            }
        };

        let doctors = wire
            .doctors
            .into_iter()
            .map(wire_to_domain)
            .collect::<RosterResult<Vec<_>>>()?;

        Self::new(doctors)
    }

    /// Render a roster as YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if serialization fails.
    pub fn render(&self) -> RosterResult<String> {
        let wire = RosterWire {
            doctors: self.doctors.iter().map(domain_to_wire).collect(),
        };
        serde_yaml::to_string(&wire)
            .map_err(|e| RosterError::Translation(format!("Failed to serialize roster: {e}")))
    }

    /// Read and parse a roster file.
    pub fn load(path: &Path) -> RosterResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// The built-in sample roster.
    pub fn sample() -> RosterResult<Self> {
        Self::parse(SAMPLE_ROSTER_YAML)
    }

    pub fn doctors(&self) -> &[DoctorRecord] {
        &self.doctors
    }

    pub fn get(&self, id: &str) -> Option<&DoctorRecord> {
        self.doctors.iter().find(|d| d.id.as_str() == id)
    }

    /// General physicians, in roster order.
    pub fn general_physicians(&self) -> impl Iterator<Item = &DoctorRecord> {
        self.doctors.iter().filter(|d| d.is_general_physician())
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct RosterWire {
    doctors: Vec<DoctorWire>,
}

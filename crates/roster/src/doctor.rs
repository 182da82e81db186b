//! Doctor record domain type and its wire representation.
//!
//! Responsibilities:
//! - Define the public domain-level [`DoctorRecord`]
//! - Define a strict wire model for roster files
//! - Translate between the two, validating every field on the way in

use crate::RosterError;
use serde::{Deserialize, Serialize};
use vitalscan_types::{NonEmptyText, Specialization, Urgency};

// ============================================================================
// Public domain-level types
// ============================================================================

/// A single entry of the static, read-only doctor roster.
///
/// Serialises with the camelCase key set that roster consumers expect.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    pub id: NonEmptyText,
    pub name: String,
    pub specialization: Specialization,
    /// Star rating in `0.0..=5.0`. Static data, used only as a tie-break.
    pub rating: f64,
    /// Review count. Static data, used only as a tie-break.
    pub reviews: u32,
    pub address: String,
    pub phone: String,
    pub bio: String,
    pub image_url: String,
    pub urgency_match: Vec<Urgency>,
    /// Condition names this doctor treats, compared case-insensitively.
    pub conditions_match: Vec<String>,
}

impl DoctorRecord {
    pub fn is_general_physician(&self) -> bool {
        self.specialization.is_general_physician()
    }

    pub fn is_specialist(&self) -> bool {
        !self.is_general_physician()
    }

    pub fn handles_urgency(&self, urgency: Urgency) -> bool {
        self.urgency_match.contains(&urgency)
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

/// Wire representation of a doctor entry in a roster file.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub(crate) struct DoctorWire {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub rating: f64,
    pub reviews: u32,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub urgency_match: Vec<String>,
    #[serde(default)]
    pub conditions_match: Vec<String>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

/// Convert a wire doctor entry to the domain type.
pub(crate) fn wire_to_domain(wire: DoctorWire) -> Result<DoctorRecord, RosterError> {
    let id = NonEmptyText::new(&wire.id)
        .map_err(|_| RosterError::InvalidInput("doctor id cannot be empty".into()))?;

    let specialization = Specialization::new(&wire.specialization).map_err(|_| {
        RosterError::InvalidInput(format!("doctor {id} has an empty specialization"))
    })?;

    if !(0.0..=5.0).contains(&wire.rating) {
        return Err(RosterError::InvalidInput(format!(
            "doctor {id} has rating {} outside 0-5",
            wire.rating
        )));
    }

    let urgency_match = wire
        .urgency_match
        .iter()
        .map(|u| u.parse::<Urgency>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| RosterError::InvalidInput(format!("doctor {id}: {e}")))?;

    Ok(DoctorRecord {
        id,
        name: wire.name,
        specialization,
        rating: wire.rating,
        reviews: wire.reviews,
        address: wire.address,
        phone: wire.phone,
        bio: wire.bio,
        image_url: wire.image_url,
        urgency_match,
        conditions_match: wire.conditions_match,
    })
}

/// Convert a domain doctor record to its wire form.
pub(crate) fn domain_to_wire(doctor: &DoctorRecord) -> DoctorWire {
    DoctorWire {
        id: doctor.id.to_string(),
        name: doctor.name.clone(),
        specialization: doctor.specialization.to_string(),
        rating: doctor.rating,
        reviews: doctor.reviews,
        address: doctor.address.clone(),
        phone: doctor.phone.clone(),
        bio: doctor.bio.clone(),
        image_url: doctor.image_url.clone(),
        urgency_match: doctor
            .urgency_match
            .iter()
            .map(|u| u.as_str().to_owned())
            .collect(),
        conditions_match: doctor.conditions_match.clone(),
    }
}

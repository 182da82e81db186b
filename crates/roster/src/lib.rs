//! Doctor roster wire/boundary support.
//!
//! This crate provides the **wire model** and **format/translation helpers** for the doctor
//! roster consumed by the recommendation scorer:
//! - strict YAML parsing of roster files, reporting the failing field path
//! - rendering a roster back to YAML
//! - the built-in sample roster used when no roster file is configured
//!
//! The domain-level [`DoctorRecord`] serialises with the exact camelCase key set expected by
//! existing API consumers (`imageUrl`, `urgencyMatch`, `conditionsMatch`, ...).

pub mod doctor;
pub mod roster;

pub use doctor::DoctorRecord;
pub use roster::Roster;

pub use vitalscan_types::{Specialization, Urgency, GENERAL_PHYSICIAN};

/// Errors returned by the `roster` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`RosterError`].
pub type RosterResult<T> = Result<T, RosterError>;

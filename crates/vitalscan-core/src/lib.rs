//! # VitalScan Core
//!
//! Core business logic for the VitalScan health-monitoring service.
//!
//! This crate contains pure recommendation logic:
//! - condition input normalisation
//! - the doctor recommendation scorer and its point policy
//! - interpreted scan results as a tagged union
//! - a recommendation service over a roster injected at startup
//!
//! **No API concerns**: HTTP servers, CLI parsing and environment handling belong in
//! `api-rest`, `vitalscan-cli` and the runner binary.

pub mod conditions;
pub mod config;
pub mod constants;
pub mod error;
pub mod recommendation;
pub mod scan;
pub mod scoring;

pub use conditions::{normalise_conditions, ConditionsInput};
pub use config::{roster_file_from_env_value, CoreConfig};
pub use constants::{DEFAULT_REST_ADDR, REST_ADDR_ENV, ROSTER_FILE_ENV};
pub use error::{CoreError, CoreResult};
pub use recommendation::{RecommendationRequest, RecommendationService};
pub use scan::ScanResult;
pub use scoring::{assign_doctors, assign_doctors_with, rank_doctors, ScoredDoctor, ScoringPolicy};

pub use roster::{DoctorRecord, Roster};
pub use vitalscan_types::{Specialization, Urgency};

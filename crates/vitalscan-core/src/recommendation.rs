//! Doctor recommendation service.
//!
//! Wraps the scorer with the roster and policy resolved at startup. The local heuristic is
//! always the baseline; a preferred specialty (for example from a remote specialty recommender)
//! only reorders its output.

use crate::conditions::ConditionsInput;
use crate::config::CoreConfig;
use crate::scan::ScanResult;
use crate::scoring::{rank_doctors, ScoredDoctor};
use crate::{CoreError, CoreResult};
use roster::{DoctorRecord, Roster};
use std::sync::Arc;
use vitalscan_types::Urgency;

/// A single recommendation request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendationRequest {
    pub conditions: Option<ConditionsInput>,
    pub urgency: Option<Urgency>,
    pub preferred_specialty: Option<String>,
}

impl RecommendationRequest {
    /// Build a request from caller-supplied labels.
    ///
    /// Only the exact urgency labels `Low`, `Medium` and `High` can earn an urgency match; any
    /// other label is kept out of scoring rather than rejected.
    pub fn from_labels(
        conditions: Option<ConditionsInput>,
        urgency: Option<&str>,
        preferred_specialty: Option<String>,
    ) -> Self {
        Self {
            conditions,
            urgency: urgency.and_then(Urgency::from_label),
            preferred_specialty,
        }
    }
}

impl From<&ScanResult> for RecommendationRequest {
    fn from(scan: &ScanResult) -> Self {
        Self {
            conditions: Some(scan.conditions()),
            urgency: scan.urgency(),
            preferred_specialty: None,
        }
    }
}

/// Recommendation operations over an injected, read-only roster.
#[derive(Clone, Debug)]
pub struct RecommendationService {
    cfg: Arc<CoreConfig>,
    roster: Arc<Roster>,
}

impl RecommendationService {
    pub fn new(cfg: Arc<CoreConfig>, roster: Arc<Roster>) -> Self {
        Self { cfg, roster }
    }

    /// Build a service by loading the roster the configuration points at.
    pub fn from_config(cfg: Arc<CoreConfig>) -> CoreResult<Self> {
        let roster = Arc::new(cfg.load_roster()?);
        Ok(Self::new(cfg, roster))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn list_doctors(&self) -> &[DoctorRecord] {
        self.roster.doctors()
    }

    /// Look up a doctor by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownDoctor`] if no doctor has that id.
    pub fn get_doctor(&self, id: &str) -> CoreResult<&DoctorRecord> {
        self.roster
            .get(id)
            .ok_or_else(|| CoreError::UnknownDoctor(id.to_owned()))
    }

    /// Ranked candidates with their scores, after any preferred-specialty promotion.
    pub fn explain(&self, request: &RecommendationRequest) -> Vec<ScoredDoctor<'_>> {
        let mut ranked = rank_doctors(
            &self.roster,
            self.cfg.policy(),
            request.conditions.as_ref(),
            request.urgency,
        );

        if let Some(specialty) = request
            .preferred_specialty
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            // Stable: the heuristic's order is kept within both groups.
            ranked.sort_by_key(|s| !s.doctor.specialization.matches(specialty));
            tracing::debug!(specialty, "promoted preferred specialty");
        }

        ranked
    }

    /// Recommend doctors for a request. The returned records carry no score.
    pub fn recommend(&self, request: &RecommendationRequest) -> Vec<DoctorRecord> {
        self.explain(request)
            .into_iter()
            .map(|s| s.doctor.clone())
            .collect()
    }

    /// Recommend doctors for an interpreted scan.
    pub fn recommend_for_scan(&self, scan: &ScanResult) -> Vec<DoctorRecord> {
        let doctors = self.recommend(&RecommendationRequest::from(scan));
        tracing::info!(
            scan_type = scan.kind(),
            recommended = doctors.len(),
            "recommended doctors for scan"
        );
        doctors
    }
}

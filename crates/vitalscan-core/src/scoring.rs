//! Doctor recommendation scoring.
//!
//! Every doctor in the roster is scored against the normalised condition list:
//! - each (condition, listed condition) pair that is equal earns [`ScoringPolicy::exact_match`]
//! - each pair where one contains the other earns [`ScoringPolicy::partial_match`]
//! - a doctor who handles the requested urgency earns [`ScoringPolicy::urgency_match`]
//! - every non-GP doctor earns [`ScoringPolicy::specialist_bias`]
//!
//! Pairs are not deduplicated, so a short condition that is a substring of many listed
//! conditions accumulates many partial hits.
//!
//! Specialists win whenever any of them scores above zero; general physicians are only returned
//! when no specialist does. When no conditions are supplied at all, the general physicians are
//! returned in roster order without scoring.

use crate::conditions::{normalise_conditions, ConditionsInput};
use crate::constants::{
    EXACT_MATCH_POINTS, PARTIAL_MATCH_POINTS, SPECIALIST_BIAS_POINTS, URGENCY_MATCH_POINTS,
};
use roster::{DoctorRecord, Roster};
use std::cmp::Ordering;
use vitalscan_types::Urgency;

/// Point weights used by the scorer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoringPolicy {
    pub exact_match: u32,
    pub partial_match: u32,
    pub urgency_match: u32,
    pub specialist_bias: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            exact_match: EXACT_MATCH_POINTS,
            partial_match: PARTIAL_MATCH_POINTS,
            urgency_match: URGENCY_MATCH_POINTS,
            specialist_bias: SPECIALIST_BIAS_POINTS,
        }
    }
}

impl ScoringPolicy {
    /// Score a single doctor against already-normalised conditions.
    pub fn score(
        &self,
        doctor: &DoctorRecord,
        conditions: &[String],
        urgency: Option<Urgency>,
    ) -> u32 {
        let listed_conditions: Vec<String> = doctor
            .conditions_match
            .iter()
            .map(|c| c.to_lowercase())
            .collect();

        let mut exact_matches = 0u32;
        let mut partial_matches = 0u32;

        for condition in conditions {
            for listed in &listed_conditions {
                if condition == listed {
                    exact_matches += 1;
                } else if condition.contains(listed.as_str()) || listed.contains(condition.as_str())
                {
                    partial_matches += 1;
                }
            }
        }

        let mut score = exact_matches * self.exact_match + partial_matches * self.partial_match;

        if urgency.is_some_and(|u| doctor.handles_urgency(u)) {
            score += self.urgency_match;
        }

        if doctor.is_specialist() {
            score += self.specialist_bias;
        }

        score
    }
}

/// A doctor together with the score it earned for one request.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredDoctor<'a> {
    pub doctor: &'a DoctorRecord,
    pub score: u32,
}

/// Score, filter and order the roster for one request.
///
/// Returns the candidates with their transient scores. When the normalised condition list is
/// empty, the general physicians are returned in roster order with a score of zero.
pub fn rank_doctors<'a>(
    roster: &'a Roster,
    policy: &ScoringPolicy,
    conditions: Option<&ConditionsInput>,
    urgency: Option<Urgency>,
) -> Vec<ScoredDoctor<'a>> {
    let conditions = normalise_conditions(conditions);

    if conditions.is_empty() {
        tracing::debug!("no conditions supplied; returning general physicians");
        return roster
            .general_physicians()
            .map(|doctor| ScoredDoctor { doctor, score: 0 })
            .collect();
    }

    let scored: Vec<ScoredDoctor<'a>> = roster
        .doctors()
        .iter()
        .map(|doctor| ScoredDoctor {
            doctor,
            score: policy.score(doctor, &conditions, urgency),
        })
        .collect();

    let max_specialist_score = scored
        .iter()
        .filter(|s| s.doctor.is_specialist())
        .map(|s| s.score)
        .fold(0, u32::max);

    let specialists_win = max_specialist_score > 0;
    let candidates: Vec<ScoredDoctor<'a>> = scored
        .into_iter()
        .filter(|s| s.doctor.is_specialist() == specialists_win)
        .collect();

    let has_specialists = candidates.iter().any(|s| s.doctor.is_specialist());
    let mut ranked: Vec<ScoredDoctor<'a>> = if has_specialists {
        candidates.into_iter().filter(|s| s.score > 0).collect()
    } else {
        candidates
    };

    ranked.sort_by(compare_ranked);

    tracing::debug!(
        conditions = conditions.len(),
        max_specialist_score,
        specialists_win,
        returned = ranked.len(),
        "ranked doctors"
    );

    ranked
}

/// Score descending, then rating descending, then reviews descending.
fn compare_ranked(a: &ScoredDoctor<'_>, b: &ScoredDoctor<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.doctor.rating.total_cmp(&a.doctor.rating))
        .then_with(|| b.doctor.reviews.cmp(&a.doctor.reviews))
}

/// Recommend doctors for the given conditions and urgency using the default policy.
///
/// The roster is never modified; the returned records are copies in ranked order and carry no
/// score.
pub fn assign_doctors(
    roster: &Roster,
    conditions: Option<&ConditionsInput>,
    urgency: Option<Urgency>,
) -> Vec<DoctorRecord> {
    assign_doctors_with(roster, &ScoringPolicy::default(), conditions, urgency)
}

/// [`assign_doctors`] with an explicit policy.
pub fn assign_doctors_with(
    roster: &Roster,
    policy: &ScoringPolicy,
    conditions: Option<&ConditionsInput>,
    urgency: Option<Urgency>,
) -> Vec<DoctorRecord> {
    rank_doctors(roster, policy, conditions, urgency)
        .into_iter()
        .map(|s| s.doctor.clone())
        .collect()
}

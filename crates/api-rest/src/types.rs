//! Request and response bodies for the REST API.
//!
//! Doctor records keep the camelCase key set existing clients consume
//! (`imageUrl`, `urgencyMatch`, `conditionsMatch`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vitalscan_core::{ConditionsInput, DoctorRecord, ScanResult};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A roster entry as returned to clients. Never carries a score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDto {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub rating: f64,
    pub reviews: u32,
    pub address: String,
    pub phone: String,
    pub bio: String,
    pub image_url: String,
    pub urgency_match: Vec<String>,
    pub conditions_match: Vec<String>,
}

impl From<&DoctorRecord> for DoctorDto {
    fn from(doctor: &DoctorRecord) -> Self {
        Self {
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
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListDoctorsRes {
    pub doctors: Vec<DoctorDto>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendReq {
    /// A single condition string or a list of condition strings.
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub conditions: Option<ConditionsInput>,
    /// Low, Medium or High.
    #[serde(default)]
    pub urgency: Option<String>,
    /// Specialty to promote to the top of the results.
    #[serde(default)]
    pub preferred_specialty: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RecommendRes {
    pub doctors: Vec<DoctorDto>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ScanRecommendReq {
    /// Interpreted scan result tagged by `scanType`.
    #[schema(value_type = Object)]
    pub scan: ScanResult,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecommendRes {
    pub scan_type: String,
    pub urgency: Option<String>,
    pub doctors: Vec<DoctorDto>,
}

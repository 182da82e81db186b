//! # API REST
//!
//! REST API implementation for VitalScan.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, CORS, status codes)
//!
//! All recommendation logic lives in `vitalscan-core`; this crate only translates requests.

#![warn(rust_2018_idioms)]

pub mod health;
pub mod types;

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use vitalscan_core::{CoreError, RecommendationRequest, RecommendationService, ScanResult};

pub use health::HealthService;
use types::{
    DoctorDto, HealthRes, ListDoctorsRes, RecommendReq, RecommendRes, ScanRecommendReq,
    ScanRecommendRes,
};

/// Application state for the REST API server
///
/// Holds the recommendation service built once at startup over the configured roster.
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<RecommendationService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_doctors, get_doctor, recommend_doctors, recommend_for_scan),
    components(schemas(
        HealthRes,
        DoctorDto,
        ListDoctorsRes,
        RecommendReq,
        RecommendRes,
        ScanRecommendReq,
        ScanRecommendRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/doctors", get(list_doctors))
        .route("/doctors/recommend", post(recommend_doctors))
        .route("/doctors/:id", get(get_doctor))
        .route("/scans/recommend", post(recommend_for_scan))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/doctors",
    responses(
        (status = 200, description = "All doctors in the roster", body = ListDoctorsRes)
    )
)]
/// List every doctor in the roster, in roster order.
#[axum::debug_handler]
async fn list_doctors(State(state): State<AppState>) -> Json<ListDoctorsRes> {
    let doctors = state
        .recommendations
        .list_doctors()
        .iter()
        .map(DoctorDto::from)
        .collect();
    Json(ListDoctorsRes { doctors })
}

#[utoipa::path(
    get,
    path = "/doctors/{id}",
    params(("id" = String, Path, description = "Doctor id")),
    responses(
        (status = 200, description = "Doctor record", body = DoctorDto),
        (status = 404, description = "Unknown doctor")
    )
)]
/// Fetch a single doctor by id.
///
/// # Errors
/// Returns `404 Not Found` if no doctor has the given id.
#[axum::debug_handler]
async fn get_doctor(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<DoctorDto>, (StatusCode, &'static str)> {
    match state.recommendations.get_doctor(&id) {
        Ok(doctor) => Ok(Json(DoctorDto::from(doctor))),
        Err(CoreError::UnknownDoctor(_)) => Err((StatusCode::NOT_FOUND, "Unknown doctor")),
        Err(e) => {
            tracing::error!("Get doctor error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/doctors/recommend",
    request_body = RecommendReq,
    responses(
        (status = 200, description = "Ranked doctors", body = RecommendRes)
    )
)]
/// Recommend doctors for a set of conditions and an optional urgency.
///
/// `conditions` may be a single string, a list of strings or absent. `urgency` earns a bonus only
/// when it is exactly Low, Medium or High; any other label is ignored. An empty result means no
/// confident match.
#[axum::debug_handler]
async fn recommend_doctors(
    State(state): State<AppState>,
    Json(req): Json<RecommendReq>,
) -> Json<RecommendRes> {
    let request = RecommendationRequest::from_labels(
        req.conditions,
        req.urgency.as_deref(),
        req.preferred_specialty,
    );

    let doctors = state
        .recommendations
        .recommend(&request)
        .iter()
        .map(DoctorDto::from)
        .collect();
    Json(RecommendRes { doctors })
}

#[utoipa::path(
    post,
    path = "/scans/recommend",
    request_body = ScanRecommendReq,
    responses(
        (status = 200, description = "Ranked doctors for the scan", body = ScanRecommendRes),
        (status = 422, description = "Unprocessable scan result")
    )
)]
/// Recommend doctors for an interpreted scan result.
#[axum::debug_handler]
async fn recommend_for_scan(
    State(state): State<AppState>,
    Json(req): Json<ScanRecommendReq>,
) -> Json<ScanRecommendRes> {
    let scan: &ScanResult = &req.scan;
    let doctors = state
        .recommendations
        .recommend_for_scan(scan)
        .iter()
        .map(DoctorDto::from)
        .collect();

    Json(ScanRecommendRes {
        scan_type: scan.kind().to_owned(),
        urgency: scan.urgency().map(|u| u.as_str().to_owned()),
        doctors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use vitalscan_core::CoreConfig;

    fn app() -> Router {
        let service = RecommendationService::from_config(Arc::new(CoreConfig::default()))
            .expect("recommendation service");
        router(AppState {
            recommendations: Arc::new(service),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    fn ids(json: &serde_json::Value) -> Vec<String> {
        json["doctors"]
            .as_array()
            .expect("doctors array")
            .iter()
            .map(|d| d["id"].as_str().expect("id").to_owned())
            .collect()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, json) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ok"], true);
    }

    #[tokio::test]
    async fn lists_sample_roster() {
        let (status, json) = send(get("/doctors")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec!["d1", "d2", "d3", "d4", "d5", "d6"]);
        assert_eq!(json["doctors"][0]["imageUrl"], "https://images.vitalscan.dev/doctors/d1.jpg");
        assert!(json["doctors"][0].get("score").is_none());
    }

    #[tokio::test]
    async fn unknown_doctor_is_not_found() {
        let (status, _) = send(get("/doctors/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, json) = send(get("/doctors/d4")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["specialization"], "General Physician");
    }

    #[tokio::test]
    async fn recommends_for_conditions() {
        let (status, json) = send(post_json(
            "/doctors/recommend",
            serde_json::json!({"conditions": ["Arrhythmia (AFib)"], "urgency": "High"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec!["d5", "d1", "d6", "d2", "d3"]);
    }

    #[tokio::test]
    async fn accepts_single_string_and_missing_conditions() {
        let (_, json) = send(post_json(
            "/doctors/recommend",
            serde_json::json!({"conditions": "Glaucoma"}),
        ))
        .await;
        assert_eq!(ids(&json)[0], "d3");

        let (_, json) = send(post_json("/doctors/recommend", serde_json::json!({}))).await;
        assert_eq!(ids(&json), vec!["d4"]);
    }

    #[tokio::test]
    async fn unknown_urgency_is_ignored() {
        let body = |urgency: Option<&str>| {
            serde_json::json!({"conditions": ["Shortness of Breath"], "urgency": urgency})
        };

        let (_, baseline) = send(post_json("/doctors/recommend", body(None))).await;
        assert_eq!(ids(&baseline), vec!["d5", "d6", "d1", "d2", "d3"]);

        for label in ["Critical", "medium"] {
            let (status, json) = send(post_json("/doctors/recommend", body(Some(label)))).await;
            assert_eq!(status, StatusCode::OK, "urgency {label:?}");
            assert_eq!(ids(&json), ids(&baseline), "urgency {label:?}");
        }

        let (_, json) = send(post_json("/doctors/recommend", body(Some("Medium")))).await;
        assert_eq!(&ids(&json)[..2], &["d6".to_string(), "d5".to_string()]);
    }

    #[tokio::test]
    async fn recommends_for_scan() {
        let (status, json) = send(post_json(
            "/scans/recommend",
            serde_json::json!({
                "scan": {"scanType": "symptom", "symptoms": ["Shortness of Breath"], "urgency": "Medium"}
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["scanType"], "symptom");
        assert_eq!(json["urgency"], "Medium");
        assert_eq!(&ids(&json)[..2], &["d6".to_string(), "d5".to_string()]);
    }
}

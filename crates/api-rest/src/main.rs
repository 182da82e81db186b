//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development when you only want the REST server (with OpenAPI/Swagger UI). The
//! workspace's `vitalscan-run` binary additionally loads `.env` files before starting it.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use vitalscan_core::{
    roster_file_from_env_value, CoreConfig, RecommendationService, ScoringPolicy,
    DEFAULT_REST_ADDR, REST_ADDR_ENV, ROSTER_FILE_ENV,
};

/// Main entry point for the VitalScan REST API server
///
/// # Environment Variables
/// - `VITALSCAN_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `VITALSCAN_ROSTER_FILE`: Roster YAML file (default: built-in sample roster)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the roster cannot be loaded or fails validation,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("vitalscan_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let roster_file = roster_file_from_env_value(std::env::var(ROSTER_FILE_ENV).ok());
    let cfg = Arc::new(CoreConfig::new(roster_file, ScoringPolicy::default())?);
    let recommendations = Arc::new(RecommendationService::from_config(cfg)?);

    tracing::info!("-- Starting VitalScan REST API on {}", addr);

    let app = router(AppState { recommendations });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

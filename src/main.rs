use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use vitalscan_core::{
    CoreConfig, DEFAULT_REST_ADDR, REST_ADDR_ENV, ROSTER_FILE_ENV, RecommendationService,
    ScoringPolicy, roster_file_from_env_value,
};

/// Main entry point for the VitalScan application
///
/// Loads `.env` (if present), resolves the roster once, and serves the REST API with
/// OpenAPI/Swagger documentation.
///
/// # Environment Variables
/// - `VITALSCAN_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `VITALSCAN_ROSTER_FILE`: Roster YAML file (default: built-in sample roster)
/// - `RUST_LOG`: log filter
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, roster loading or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vitalscan_run=info".parse()?)
                .add_directive("vitalscan_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let roster_file = roster_file_from_env_value(std::env::var(ROSTER_FILE_ENV).ok());

    let cfg = Arc::new(CoreConfig::new(roster_file, ScoringPolicy::default())?);
    let recommendations = Arc::new(RecommendationService::from_config(cfg)?);

    tracing::info!(
        "++ Starting VitalScan REST on {} ({} doctors)",
        rest_addr,
        recommendations.roster().len()
    );

    let app = router(AppState { recommendations });

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

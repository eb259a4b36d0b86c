//! Health and readiness endpoints
//!
//! `/health` and `/` report readiness, not a constant: "not ready" until
//! a model snapshot is installed, "ready" thereafter.

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use manchor_common::api::HealthResponse;

use crate::AppState;

/// GET /health (also served at /)
///
/// Readiness-aware health check for monitoring and load balancers.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now().signed_duration_since(state.startup_time);
    let uptime_seconds = uptime.num_seconds().max(0) as u64;

    let model_loaded = state.inference.is_ready();
    let status = if model_loaded { "ready" } else { "not ready" };

    Json(HealthResponse {
        status: status.to_string(),
        module: "manchor-sa".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
        model_loaded,
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
}

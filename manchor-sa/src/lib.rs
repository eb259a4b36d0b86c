//! manchor-sa library interface
//!
//! Exposes the stress-analysis pipeline and router for integration testing.

pub mod api;
pub mod error;
pub mod model;
pub mod services;
pub mod types;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::model::ModelHandle;
use crate::services::InferenceService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Inference service (owns the model handle for analysis calls)
    pub inference: InferenceService,
    /// Model slot, written by startup and /model/reload
    pub model: ModelHandle,
    /// Configured external model path; `None` means the built-in model
    pub model_path: Option<PathBuf>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(model: ModelHandle, model_path: Option<PathBuf>, max_input_chars: usize) -> Self {
        Self {
            inference: InferenceService::new(model.clone(), max_input_chars),
            model,
            model_path,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::analyze_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

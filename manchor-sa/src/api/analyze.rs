//! Stress analysis API handlers
//!
//! POST /analyze-stress, POST /model/reload

use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use serde::Serialize;

use manchor_common::api::{AnalyzeRequest, AnalyzeResponse};

use crate::error::ApiResult;
use crate::model::ModelSnapshot;
use crate::types::AnalysisRequest;
use crate::AppState;

/// POST /model/reload response
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    /// Name of the freshly installed model
    pub model: String,
    /// Lexicon size of the installed model
    pub lexicon_terms: usize,
}

/// POST /analyze-stress
///
/// Runs the classification pipeline on the request text. All semantic
/// work is delegated to the inference service; this handler only maps
/// between the wire contract and the core types.
pub async fn analyze_stress(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let result = state.inference.analyze(AnalysisRequest::new(request.text))?;

    Ok(Json(AnalyzeResponse {
        input: result.input,
        stress_level: result.level.as_str().to_string(),
        confidence: result.confidence,
    }))
}

/// POST /model/reload
///
/// Re-resolves the configured model source and atomically publishes the
/// new snapshot. In-flight analyses keep the snapshot they already
/// resolved; no request ever sees a partial model.
pub async fn reload_model(State(state): State<AppState>) -> ApiResult<Json<ReloadResponse>> {
    let snapshot = match &state.model_path {
        Some(path) => ModelSnapshot::load_from_file(path)?,
        None => ModelSnapshot::builtin()?,
    };

    let response = ReloadResponse {
        model: snapshot.name.clone(),
        lexicon_terms: snapshot.dimension(),
    };

    state.model.install(snapshot);
    tracing::info!(
        model = %response.model,
        lexicon_terms = response.lexicon_terms,
        "Model reloaded"
    );

    Ok(Json(response))
}

/// Build analysis routes
pub fn analyze_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze-stress", post(analyze_stress))
        .route("/model/reload", post(reload_model))
}

//! Inference service: per-request pipeline orchestration
//!
//! Runs tokenizer -> feature extractor -> classifier for each request and
//! shapes the result contract. Validates request bounds before touching
//! the pipeline. Stateless per call apart from the shared read-only model
//! snapshot, so concurrent calls need no coordination. No retries: the
//! whole pipeline is pure and idempotent, so retrying is the caller's
//! decision.

use thiserror::Error;
use tracing::debug;

use crate::model::ModelHandle;
use crate::services::classifier::{Classifier, ClassifyError};
use crate::services::feature_extractor::{ExtractError, FeatureExtractor};
use crate::services::tokenizer::{self, TokenizeError};
use crate::types::{AnalysisRequest, AnalysisResult};

/// Analysis errors crossing the core boundary
///
/// Input errors and model-unavailable errors propagate verbatim to the
/// façade; anything unanticipated is wrapped as `Internal` so
/// implementation detail never leaks to callers.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Bad, empty, or oversized input text (client's fault, resubmittable)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model parameters unavailable (configuration failure)
    #[error("Classifier model is not loaded")]
    ModelNotLoaded,

    /// Unexpected internal fault, wrapped before crossing the boundary
    #[error("Internal analysis error: {0}")]
    Internal(String),
}

impl From<TokenizeError> for AnalysisError {
    fn from(err: TokenizeError) -> Self {
        match err {
            TokenizeError::EmptyInput => {
                AnalysisError::InvalidInput("Text is empty or contains no words".to_string())
            }
        }
    }
}

impl From<ExtractError> for AnalysisError {
    fn from(err: ExtractError) -> Self {
        // The tokenizer contract rules this out; treat it as internal.
        AnalysisError::Internal(err.to_string())
    }
}

impl From<ClassifyError> for AnalysisError {
    fn from(err: ClassifyError) -> Self {
        match err {
            ClassifyError::ModelNotLoaded => AnalysisError::ModelNotLoaded,
            ClassifyError::DimensionMismatch { .. } => AnalysisError::Internal(err.to_string()),
        }
    }
}

/// Stress-analysis inference service
///
/// The model handle is injected at construction, never reached through a
/// singleton, so tests can run the full pipeline against mock models.
#[derive(Clone)]
pub struct InferenceService {
    model: ModelHandle,
    max_input_chars: usize,
}

impl InferenceService {
    pub fn new(model: ModelHandle, max_input_chars: usize) -> Self {
        Self {
            model,
            max_input_chars,
        }
    }

    /// Whether the service is ready to classify (model installed)
    pub fn is_ready(&self) -> bool {
        self.model.is_loaded()
    }

    /// Analyze one request: validate, tokenize, extract, classify
    ///
    /// # Errors
    /// - `AnalysisError::InvalidInput` for empty, whitespace-only, or
    ///   oversized text
    /// - `AnalysisError::ModelNotLoaded` when no model is installed
    /// - `AnalysisError::Internal` for anything unanticipated
    pub fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let char_count = request.text().chars().count();
        if char_count > self.max_input_chars {
            return Err(AnalysisError::InvalidInput(format!(
                "Text is {} characters, maximum is {}",
                char_count, self.max_input_chars
            )));
        }
        if request.text().trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "Text must not be empty".to_string(),
            ));
        }

        // Resolve the snapshot once; the Arc keeps this call's model stable
        // even if a reload publishes a new one mid-flight.
        let snapshot = self.model.current();
        let tokens = tokenizer::normalize(request.text())?;

        let classification = match snapshot {
            Some(model) => {
                let extractor = FeatureExtractor::new(model.clone());
                let features = extractor.extract(&tokens)?;
                Classifier::new(Some(model)).classify(&features)?
            }
            None => return Err(AnalysisError::ModelNotLoaded),
        };

        debug!(
            level = classification.level.as_str(),
            confidence = classification.confidence,
            tokens = tokens.len(),
            "Analysis complete"
        );

        Ok(AnalysisResult {
            input: request.into_text(),
            level: classification.level,
            confidence: classification.confidence,
        })
    }
}

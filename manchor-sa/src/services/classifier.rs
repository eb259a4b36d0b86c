//! Classifier: feature vector to stress level plus confidence
//!
//! Linear model over the lexicon dimensions: per-level score is
//! dot(weights, features) + bias, confidence is the softmax of the winning
//! score. Pure function of the installed snapshot, no state between calls.
//!
//! Tie-break rule: when two levels score exactly equal, the lower-severity
//! level wins. Levels are scanned in ascending severity and a later level
//! must score strictly greater to displace the current winner.

use std::sync::Arc;
use thiserror::Error;

use crate::model::ModelSnapshot;
use crate::types::{FeatureVector, StressLevel};

/// Classifier errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    /// No model parameters installed (configuration failure, not input failure)
    #[error("Classifier model is not loaded")]
    ModelNotLoaded,

    /// Vector dimension does not match the model lexicon
    #[error("Feature vector has {actual} dimensions, model expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Classification outcome: level and confidence, produced jointly
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub level: StressLevel,
    pub confidence: f32,
}

/// Stress-level classifier over an immutable model snapshot
pub struct Classifier {
    model: Option<Arc<ModelSnapshot>>,
}

impl Classifier {
    /// Create a classifier; `None` models a misconfigured service and
    /// makes every call fail with `ModelNotLoaded`
    pub fn new(model: Option<Arc<ModelSnapshot>>) -> Self {
        Self { model }
    }

    /// Classify a feature vector
    ///
    /// # Errors
    /// - `ClassifyError::ModelNotLoaded` when no model is installed
    /// - `ClassifyError::DimensionMismatch` when the vector does not match
    ///   the model dimension
    pub fn classify(&self, vector: &FeatureVector) -> Result<Classification, ClassifyError> {
        let model = self.model.as_deref().ok_or(ClassifyError::ModelNotLoaded)?;

        if vector.dimension() != model.dimension() {
            return Err(ClassifyError::DimensionMismatch {
                expected: model.dimension(),
                actual: vector.dimension(),
            });
        }

        let mut scores = [0.0_f32; 3];
        for level in StressLevel::ALL {
            let weights = model.weights(level);
            let dot: f32 = weights
                .iter()
                .zip(vector.values.iter())
                .map(|(w, v)| w * v)
                .sum();
            scores[level.index()] = dot + model.bias(level);
        }

        // Ascending severity scan; strict > keeps the lower-severity level
        // on an exact tie.
        let mut winner = StressLevel::Low;
        for level in StressLevel::ALL {
            if scores[level.index()] > scores[winner.index()] {
                winner = level;
            }
        }

        Ok(Classification {
            level: winner,
            confidence: softmax_confidence(&scores, winner.index()),
        })
    }
}

/// Softmax probability of the winning score, numerically stabilized by
/// subtracting the maximum before exponentiation
fn softmax_confidence(scores: &[f32; 3], winner: usize) -> f32 {
    let max = scores.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exp: [f32; 3] = [
        (scores[0] - max).exp(),
        (scores[1] - max).exp(),
        (scores[2] - max).exp(),
    ];
    let sum: f32 = exp.iter().sum();
    exp[winner] / sum
}

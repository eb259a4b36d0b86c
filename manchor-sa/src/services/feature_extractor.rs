//! Feature extraction: token sequence to fixed-dimension vector
//!
//! Bag-of-words term counts against the model lexicon. The output
//! dimension is always the lexicon size, independent of how many tokens
//! came in; tokens outside the lexicon contribute nothing.

use std::sync::Arc;
use thiserror::Error;

use crate::model::ModelSnapshot;
use crate::types::{FeatureVector, Token};

/// Feature extractor errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// Token sequence was empty (tokenizer contract violation)
    #[error("Cannot extract features from an empty token sequence")]
    EmptyTokenSequence,
}

/// Feature extractor over a fixed model lexicon
pub struct FeatureExtractor {
    model: Arc<ModelSnapshot>,
}

impl FeatureExtractor {
    pub fn new(model: Arc<ModelSnapshot>) -> Self {
        Self { model }
    }

    /// Extract a bag-of-words feature vector from a token sequence
    ///
    /// Deterministic and pure. The tokenizer never emits an empty
    /// sequence, but the extractor validates anyway.
    ///
    /// # Errors
    /// Returns `ExtractError::EmptyTokenSequence` on an empty slice.
    pub fn extract(&self, tokens: &[Token]) -> Result<FeatureVector, ExtractError> {
        if tokens.is_empty() {
            return Err(ExtractError::EmptyTokenSequence);
        }

        let mut values = vec![0.0_f32; self.model.dimension()];
        for token in tokens {
            if let Some(index) = self.model.term_index(token.as_str()) {
                values[index] += 1.0;
            }
        }

        Ok(FeatureVector::new(values))
    }
}

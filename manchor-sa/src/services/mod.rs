//! Pipeline components for stress analysis
//!
//! Leaf-first: tokenizer normalizes raw text, the feature extractor maps
//! tokens onto the model lexicon, the classifier scores the vector, and
//! the inference service orchestrates the three per request.

pub mod classifier;
pub mod feature_extractor;
pub mod inference;
pub mod tokenizer;

pub use classifier::{Classification, Classifier, ClassifyError};
pub use feature_extractor::{ExtractError, FeatureExtractor};
pub use inference::{AnalysisError, InferenceService};
pub use tokenizer::TokenizeError;

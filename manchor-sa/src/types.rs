//! Core types for the stress-analysis pipeline
//!
//! Every value here lives for a single request: the façade builds an
//! `AnalysisRequest`, the pipeline threads tokens and a feature vector
//! through to an `AnalysisResult`, and nothing is shared across requests.

use serde::{Deserialize, Serialize};

/// A normalized atomic text unit produced from raw input
///
/// Lower-case, punctuation-free. Tokens have no identity beyond their
/// position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Fixed-length numeric representation of a token sequence
///
/// Dimension always equals the model lexicon size, regardless of how many
/// tokens produced it. Owned exclusively by one request's pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub values: Vec<f32>,
}

impl FeatureVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Number of dimensions in the vector
    pub fn dimension(&self) -> usize {
        self.values.len()
    }
}

/// Stress classification category
///
/// Variant order is the severity order (Low < Moderate < High); the derived
/// `Ord` is what the classifier's tie-break rule relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    /// All levels in ascending severity order
    pub const ALL: [StressLevel; 3] = [StressLevel::Low, StressLevel::Moderate, StressLevel::High];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Moderate => "moderate",
            StressLevel::High => "high",
        }
    }

    /// Position in severity order (Low = 0, High = 2)
    ///
    /// Used to index per-level model weight rows.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Immutable per-call analysis request
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    text: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the request, yielding the raw text
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Outcome of one analysis call
///
/// A level is never produced without its confidence; the two travel
/// together from the classifier out.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Original input text
    pub input: String,

    /// Classified stress level
    pub level: StressLevel,

    /// Classifier confidence (0.0-1.0)
    pub confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(StressLevel::Low < StressLevel::Moderate);
        assert!(StressLevel::Moderate < StressLevel::High);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&StressLevel::Moderate).unwrap(),
            "\"moderate\""
        );
        assert_eq!(StressLevel::High.as_str(), "high");
    }

    #[test]
    fn test_level_index_follows_severity() {
        for (i, level) in StressLevel::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }
}

//! Classifier model loading and the process-wide model slot
//!
//! Model parameters are a lexicon linear model stored as TOML: a term list
//! plus one weight row and one bias per stress level. A validated
//! `ModelSnapshot` is immutable for its lifetime; replacing the model is an
//! atomic publish of a new snapshot through `ModelHandle`, so in-flight
//! requests keep the `Arc` they already resolved and never observe a
//! partially updated model.

use manchor_common::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::types::StressLevel;

/// Built-in default model, compiled into the binary
const DEFAULT_MODEL_TOML: &str = include_str!("default_model.toml");

/// TOML model file: per-level values
#[derive(Debug, Deserialize)]
struct LevelValues {
    low: f32,
    moderate: f32,
    high: f32,
}

/// TOML model file: per-level weight rows
#[derive(Debug, Deserialize)]
struct LevelRows {
    low: Vec<f32>,
    moderate: Vec<f32>,
    high: Vec<f32>,
}

/// On-disk model file layout
#[derive(Debug, Deserialize)]
struct ModelFile {
    name: String,
    terms: Vec<String>,
    bias: LevelValues,
    weights: LevelRows,
}

/// Immutable classifier model parameters
///
/// Established once (startup or reload), read-only thereafter, shared
/// across concurrent requests behind an `Arc`.
#[derive(Debug)]
pub struct ModelSnapshot {
    /// Model name from the file, for logging and reload responses
    pub name: String,

    /// Lexicon terms in weight-row order
    terms: Vec<String>,

    /// Term -> dimension index
    index: HashMap<String, usize>,

    /// Per-level weight rows, indexed by `StressLevel::index()`
    weights: [Vec<f32>; 3],

    /// Per-level biases, indexed by `StressLevel::index()`
    bias: [f32; 3],
}

impl ModelSnapshot {
    /// Parse and validate a model from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ModelFile = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse model file: {}", e)))?;
        Self::from_file_contents(file)
    }

    /// Load and validate a model from a TOML file on disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read model file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// The compiled-in default model
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_MODEL_TOML)
    }

    fn from_file_contents(file: ModelFile) -> Result<Self> {
        if file.terms.is_empty() {
            return Err(Error::Config("Model lexicon is empty".to_string()));
        }

        let mut index = HashMap::with_capacity(file.terms.len());
        for (i, term) in file.terms.iter().enumerate() {
            if term.is_empty() || term.chars().any(|c| c.is_uppercase() || c.is_whitespace()) {
                return Err(Error::Config(format!(
                    "Lexicon term {:?} is not in normalized form (lower-case, no whitespace)",
                    term
                )));
            }
            if index.insert(term.clone(), i).is_some() {
                return Err(Error::Config(format!("Duplicate lexicon term: {:?}", term)));
            }
        }

        let dimension = file.terms.len();
        let weights = [file.weights.low, file.weights.moderate, file.weights.high];
        for (level, row) in StressLevel::ALL.iter().zip(weights.iter()) {
            if row.len() != dimension {
                return Err(Error::Config(format!(
                    "Weight row for {} has {} entries, expected {} (lexicon size)",
                    level.as_str(),
                    row.len(),
                    dimension
                )));
            }
            if row.iter().any(|w| !w.is_finite()) {
                return Err(Error::Config(format!(
                    "Weight row for {} contains a non-finite value",
                    level.as_str()
                )));
            }
        }

        let bias = [file.bias.low, file.bias.moderate, file.bias.high];
        if bias.iter().any(|b| !b.is_finite()) {
            return Err(Error::Config("Model bias contains a non-finite value".to_string()));
        }

        Ok(Self {
            name: file.name,
            terms: file.terms,
            index,
            weights,
            bias,
        })
    }

    /// Lexicon size, which is also the feature-vector dimension
    pub fn dimension(&self) -> usize {
        self.terms.len()
    }

    /// Dimension index for a term, if it is in the lexicon
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Weight row for one stress level
    pub fn weights(&self, level: StressLevel) -> &[f32] {
        &self.weights[level.index()]
    }

    /// Bias for one stress level
    pub fn bias(&self, level: StressLevel) -> f32 {
        self.bias[level.index()]
    }
}

/// Shared slot holding the current model snapshot
///
/// Read-frequently, write-rarely: every request reads, only startup and
/// reload write. Readers clone the inner `Arc` and drop the lock before
/// doing any work.
#[derive(Debug, Clone, Default)]
pub struct ModelHandle {
    slot: Arc<RwLock<Option<Arc<ModelSnapshot>>>>,
}

impl ModelHandle {
    /// A handle with no model installed (service not yet ready)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Atomically publish a new snapshot, replacing any previous one
    pub fn install(&self, snapshot: ModelSnapshot) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::new(snapshot));
    }

    /// The current snapshot, if one is installed
    pub fn current(&self) -> Option<Arc<ModelSnapshot>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.clone()
    }

    /// Whether a model is installed (readiness flag)
    pub fn is_loaded(&self) -> bool {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.is_some()
    }
}

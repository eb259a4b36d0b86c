//! Common error types for MindAnchor services

use thiserror::Error;

/// Common result type for MindAnchor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across MindAnchor services
///
/// Covers startup concerns (config files, model files); per-request
/// analysis failures have their own taxonomy in the service crate.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

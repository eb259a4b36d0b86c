//! Shared API types for MindAnchor services

pub mod types;

pub use types::{AnalyzeRequest, AnalyzeResponse, ErrorBody, ErrorDetail, HealthResponse};

//! Shared API request/response types
//!
//! Wire contract between the stress-analysis service and its clients.
//! The field names (`input`, `stress_level`) are public contract; existing
//! clients depend on them.

use serde::{Deserialize, Serialize};

/// POST /analyze-stress request body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyzeRequest {
    /// Raw free-text input to classify
    pub text: String,
}

/// POST /analyze-stress response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Original input text, echoed back
    pub input: String,

    /// Classified stress level ("low", "moderate", "high")
    pub stress_level: String,

    /// Classifier confidence in [0.0, 1.0]
    pub confidence: f32,
}

/// GET /health response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ready" once a model is loaded, "not ready" before
    pub status: String,

    /// Service name ("manchor-sa")
    pub module: String,

    /// Crate version from Cargo.toml
    pub version: String,

    /// Seconds since service started
    pub uptime_seconds: u64,

    /// Whether classifier model parameters are installed
    pub model_loaded: bool,
}

/// Error response body: `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Machine-readable error code plus human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable error code (e.g. "INVALID_INPUT", "MODEL_NOT_LOADED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_deserialization() {
        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"text": "I feel fine"}"#).unwrap();
        assert_eq!(request.text, "I feel fine");
    }

    #[test]
    fn test_analyze_response_field_names() {
        let response = AnalyzeResponse {
            input: "hello".to_string(),
            stress_level: "low".to_string(),
            confidence: 0.9,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"input\""));
        assert!(json.contains("\"stress_level\""));
        assert!(json.contains("\"confidence\""));
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: ErrorDetail {
                code: "INVALID_INPUT".to_string(),
                message: "text must not be empty".to_string(),
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_INPUT");
        assert_eq!(json["error"]["message"], "text must not be empty");
    }
}

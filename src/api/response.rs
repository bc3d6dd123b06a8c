//! API response types
//!
//! JSON envelopes for the serving boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::Violation;

/// Success envelope for `/infer`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub status: String,
    pub message: Option<String>,
    pub predictions: Value,
}

impl PredictionResponse {
    /// Wrap an opaque predictions payload
    pub fn new(predictions: Value) -> Self {
        Self {
            status: "success".to_string(),
            message: None,
            predictions,
        }
    }
}

/// Error envelope for all failure responses
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    /// Present only for validation rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}

impl ErrorResponse {
    /// Create an error envelope without violations
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            violations: None,
        }
    }

    /// Create an error envelope enumerating validation violations
    pub fn with_violations(message: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            violations: Some(violations),
        }
    }
}

/// Health check response for `/ping`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    /// Report the running crate version
    pub fn current() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

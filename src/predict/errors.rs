//! Prediction seam errors

use thiserror::Error;

/// Result type for prediction calls
pub type PredictResult<T> = Result<T, PredictError>;

/// Failures while invoking the prediction component
#[derive(Debug, Clone, Error)]
pub enum PredictError {
    /// Request never completed (connect, timeout, DNS)
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// Upstream answered a non-success status
    #[error("Upstream answered status {0}")]
    UpstreamStatus(u16),

    /// Upstream answered a body that is not valid JSON
    #[error("Unreadable upstream response: {0}")]
    InvalidBody(String),
}

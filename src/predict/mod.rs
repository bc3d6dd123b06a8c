//! Prediction seam for infergate
//!
//! The prediction component is an external collaborator: it consumes
//! batches the validator accepted and produces an opaque predictions
//! payload. This module defines the seam and ships a forwarding
//! implementation; the gateway itself computes nothing model-related.

mod errors;
mod upstream;

use async_trait::async_trait;
use serde_json::Value;

pub use errors::{PredictError, PredictResult};
pub use upstream::UpstreamPredictor;

/// The component that consumes validated records.
///
/// Ownership of the batch passes here only after acceptance; records
/// arrive exactly as the client sent them.
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Produce predictions for a validated batch.
    async fn predict(&self, records: &[Value]) -> PredictResult<Value>;
}

//! Upstream predictor
//!
//! Forwards validated batches to a remote scoring endpoint. The gateway
//! assigns no structure to what comes back; the predictions payload is
//! relayed opaquely.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::errors::{PredictError, PredictResult};
use super::Predictor;

/// Predictor that POSTs `{"instances": [...]}` to a scoring URL.
pub struct UpstreamPredictor {
    client: reqwest::Client,
    url: String,
}

impl UpstreamPredictor {
    /// Create a predictor targeting the given endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Returns the configured endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Predictor for UpstreamPredictor {
    async fn predict(&self, records: &[Value]) -> PredictResult<Value> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "instances": records }))
            .send()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::UpstreamStatus(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| PredictError::InvalidBody(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_predictor_keeps_url() {
        let predictor = UpstreamPredictor::new("http://model:8501/predict");
        assert_eq!(predictor.url(), "http://model:8501/predict");
    }
}

//! Inference routes
//!
//! `/ping` health check, `/metrics` counter snapshot, and `/infer`, the
//! single prediction endpoint: decode, validate, forward, shape.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::api::{ApiError, HealthResponse, PredictionResponse};
use crate::observability::{Logger, MetricsRegistry, MetricsSnapshot};
use crate::predict::Predictor;
use crate::validation::BatchValidator;

/// Shared per-process state: one pre-built validator, one predictor.
pub struct AppState<P: Predictor> {
    /// Validator built once from the loaded schema
    pub validator: BatchValidator,
    /// The prediction component consuming accepted batches
    pub predictor: P,
    /// Request counters
    pub metrics: MetricsRegistry,
}

impl<P: Predictor> AppState<P> {
    /// Assemble the serving state
    pub fn new(validator: BatchValidator, predictor: P) -> Self {
        Self {
            validator,
            predictor,
            metrics: MetricsRegistry::new(),
        }
    }
}

/// Build the inference router
pub fn inference_routes<P: Predictor + 'static>(state: Arc<AppState<P>>) -> Router {
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/metrics", get(metrics_handler::<P>))
        .route("/infer", post(infer_handler::<P>))
        .with_state(state)
}

/// Health check handler
async fn ping_handler() -> Json<HealthResponse> {
    Json(HealthResponse::current())
}

/// Metrics snapshot handler
async fn metrics_handler<P: Predictor + 'static>(
    State(state): State<Arc<AppState<P>>>,
) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

/// Inference handler: validate the decoded batch, forward on acceptance.
///
/// The batch travels under the body's `instances` key; an absent key is a
/// missing batch, not a decode failure.
async fn infer_handler<P: Predictor + 'static>(
    State(state): State<Arc<AppState<P>>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    state.metrics.increment_requests();

    let records = match state.validator.validate(body.get("instances")) {
        Ok(records) => records,
        Err(rejection) => {
            state.metrics.increment_rejected();
            state.metrics.add_violations(rejection.count() as u64);
            Logger::warn(
                "INFER_REJECTED",
                &[("violations", &rejection.count().to_string())],
            );
            return Err(ApiError::Validation(rejection));
        }
    };

    state.metrics.increment_accepted();
    Logger::info("INFER_REQUEST", &[("records", &records.len().to_string())]);

    let predictions = match state.predictor.predict(records).await {
        Ok(predictions) => predictions,
        Err(err) => {
            state.metrics.increment_upstream_failures();
            Logger::error("UPSTREAM_FAILED", &[("reason", &err.to_string())]);
            return Err(ApiError::Predict(err));
        }
    };

    state.metrics.increment_predictions();
    Ok(Json(PredictionResponse::new(predictions)))
}

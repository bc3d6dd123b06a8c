//! API error types
//!
//! Maps gateway failures onto HTTP responses. Validation rejections are
//! client-input problems and surface every violation verbatim; upstream
//! failures are gateway-side and carry no violation list.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::predict::PredictError;
use crate::validation::BatchRejection;

use super::response::ErrorResponse;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a request can produce at the serving boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body was not decodable JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Batch failed schema validation
    #[error("{0}")]
    Validation(#[from] BatchRejection),

    /// Prediction component failed
    #[error("Prediction failed: {0}")]
    Predict(#[from] PredictError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Predict(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(rejection) => {
                let message = rejection.to_string();
                ErrorResponse::with_violations(message, rejection.violations().to_vec())
            }
            other => ErrorResponse::new(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

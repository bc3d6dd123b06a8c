//! API types for infergate
//!
//! Response envelopes and the HTTP error mapping. The validator returns
//! data, never a transport response; this module is where outcomes become
//! status codes and JSON bodies.

mod errors;
mod response;

pub use errors::{ApiError, ApiResult};
pub use response::{ErrorResponse, HealthResponse, PredictionResponse};

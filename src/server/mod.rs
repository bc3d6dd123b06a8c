//! Serving boundary for infergate
//!
//! # Endpoints
//!
//! - `GET /ping` - Health check
//! - `GET /metrics` - Counter snapshot
//! - `POST /infer` - Validate a batch and forward it for prediction

mod config;
mod routes;
mod server;

pub use config::ServerConfig;
pub use routes::{inference_routes, AppState};
pub use server::InferenceServer;

//! HTTP server
//!
//! Binds the inference router to a socket and serves until terminated.
//! The validator is built before the listener opens; no request is ever
//! handled without a verified schema.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;
use crate::predict::Predictor;
use crate::validation::BatchValidator;

use super::config::ServerConfig;
use super::routes::{inference_routes, AppState};

/// The serving boundary for one schema deployment.
pub struct InferenceServer<P: Predictor> {
    config: ServerConfig,
    state: Arc<AppState<P>>,
}

impl<P: Predictor + 'static> InferenceServer<P> {
    /// Create a server around a pre-built validator and a predictor.
    pub fn new(config: ServerConfig, validator: BatchValidator, predictor: P) -> Self {
        Self {
            config,
            state: Arc::new(AppState::new(validator, predictor)),
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Build the router (exposed for tests)
    pub fn router(&self) -> Router {
        let cors = if self.config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        inference_routes(self.state.clone()).layer(cors)
    }

    /// Start serving (async); runs until the process is terminated.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let router = self.router();

        Logger::info("SERVER_START", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

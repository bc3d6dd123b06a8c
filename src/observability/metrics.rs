//! Metrics registry for infergate
//!
//! - Counters only, monotonic increase
//! - Reset only on process start
//! - Thread-safe via atomics, Relaxed ordering

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters for the gateway.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Inference requests received
    requests_received: AtomicU64,
    /// Batches that passed validation
    batches_accepted: AtomicU64,
    /// Batches rejected by validation
    batches_rejected: AtomicU64,
    /// Individual violations reported across all rejections
    violations_reported: AtomicU64,
    /// Batches successfully forwarded for prediction
    predictions_forwarded: AtomicU64,
    /// Prediction component failures
    upstream_failures: AtomicU64,
}

/// Point-in-time view of all counters.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub requests_received: u64,
    pub batches_accepted: u64,
    pub batches_rejected: u64,
    pub violations_reported: u64,
    pub predictions_forwarded: u64,
    pub upstream_failures: u64,
}

impl MetricsRegistry {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment inference requests received
    pub fn increment_requests(&self) {
        self.requests_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment accepted batches
    pub fn increment_accepted(&self) {
        self.batches_accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment rejected batches
    pub fn increment_rejected(&self) {
        self.batches_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Add to the reported-violation count
    pub fn add_violations(&self, count: u64) {
        self.violations_reported.fetch_add(count, Ordering::Relaxed);
    }

    /// Increment forwarded predictions
    pub fn increment_predictions(&self) {
        self.predictions_forwarded.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment upstream failures
    pub fn increment_upstream_failures(&self) {
        self.upstream_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_received: self.requests_received.load(Ordering::Relaxed),
            batches_accepted: self.batches_accepted.load(Ordering::Relaxed),
            batches_rejected: self.batches_rejected.load(Ordering::Relaxed),
            violations_reported: self.violations_reported.load(Ordering::Relaxed),
            predictions_forwarded: self.predictions_forwarded.load(Ordering::Relaxed),
            upstream_failures: self.upstream_failures.load(Ordering::Relaxed),
        }
    }
}

//! Batch validation subsystem for infergate
//!
//! This is the core of the gateway: a validator is built once per schema
//! and invoked per incoming batch.
//!
//! # Design Principles
//!
//! - Schema captured by value at build time
//! - Batch shape checks before per-record checks
//! - Every per-record violation is collected and reported together
//! - Accepted batches pass through unchanged
//! - No coercion, no mutation, no side effects

mod validator;
mod violation;

pub use validator::BatchValidator;
pub use violation::{
    BatchRejection, Violation, ViolationKind, NUMERIC_OR_NULL, STRING_NUMERIC_OR_NULL,
};

//! Schema subsystem for infergate
//!
//! # Design Principles
//!
//! - One descriptor per process, loaded at startup
//! - Structural consistency verified before any validator is built
//! - Loader failures are fatal, never deferred to request time
//! - The descriptor is frozen for the serving lifetime

mod errors;
mod loader;
mod types;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult};
pub use loader::SchemaLoader;
pub use types::InferenceSchema;

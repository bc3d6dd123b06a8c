//! infergate - A schema-strict gateway that validates batched records
//! before inference
//!
//! Records reach the prediction component only after passing a
//! schema-driven validator; malformed input is rejected early with
//! field-level diagnostics.

pub mod api;
pub mod cli;
pub mod observability;
pub mod predict;
pub mod schema;
pub mod server;
pub mod validation;

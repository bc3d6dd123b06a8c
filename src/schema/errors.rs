//! Schema error types
//!
//! Error codes:
//! - GATE_SCHEMA_UNREADABLE (FATAL)
//! - GATE_SCHEMA_MALFORMED (FATAL)
//! - GATE_SCHEMA_INCONSISTENT (FATAL)
//!
//! All schema errors are fatal at startup: a process must never serve
//! requests against a descriptor it could not load and verify.

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Schema file could not be read
    GateSchemaUnreadable,
    /// Schema file is not valid JSON for a descriptor
    GateSchemaMalformed,
    /// Descriptor violates its own structural rules
    GateSchemaInconsistent,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::GateSchemaUnreadable => "GATE_SCHEMA_UNREADABLE",
            SchemaErrorCode::GateSchemaMalformed => "GATE_SCHEMA_MALFORMED",
            SchemaErrorCode::GateSchemaInconsistent => "GATE_SCHEMA_INCONSISTENT",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error with source context
#[derive(Debug)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message
    message: String,
    /// Path of the offending schema file, if any
    path: Option<String>,
}

impl SchemaError {
    /// Create an unreadable-file error
    pub fn unreadable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            code: SchemaErrorCode::GateSchemaUnreadable,
            message: format!("Failed to read schema file '{}': {}", path, reason.into()),
            path: Some(path),
        }
    }

    /// Create a malformed-file error
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            code: SchemaErrorCode::GateSchemaMalformed,
            message: format!("Malformed schema file '{}': {}", path, reason.into()),
            path: Some(path),
        }
    }

    /// Create an inconsistent-descriptor error
    pub fn inconsistent(reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::GateSchemaInconsistent,
            message: format!("Inconsistent schema descriptor: {}", reason.into()),
            path: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the schema file path if applicable
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

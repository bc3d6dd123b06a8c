//! Violation taxonomy for batch validation
//!
//! Every violation names a kind, a location (record index, plus the
//! record's identifier value when it can be resolved), the offending field
//! where applicable, and a human-readable message. Violations are data:
//! they are collected and returned, never raised as control flow.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Expected-class label for numeric features
pub const NUMERIC_OR_NULL: &str = "numeric or null";
/// Expected-class label for categorical features
pub const STRING_NUMERIC_OR_NULL: &str = "string, numeric, or null";

/// The closed set of rules a batch can break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// Batch reference absent
    MissingBatch,
    /// Batch is not a sequence of record-like mappings
    MalformedBatch,
    /// Batch has zero records
    EmptyBatch,
    /// A record lacks the schema's identifier key
    MissingIdentifier,
    /// A record lacks a required feature key
    MissingFeature,
    /// A present feature's value does not match its declared class
    TypeMismatch,
}

impl ViolationKind {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::MissingBatch => "MISSING_BATCH",
            ViolationKind::MalformedBatch => "MALFORMED_BATCH",
            ViolationKind::EmptyBatch => "EMPTY_BATCH",
            ViolationKind::MissingIdentifier => "MISSING_IDENTIFIER",
            ViolationKind::MissingFeature => "MISSING_FEATURE",
            ViolationKind::TypeMismatch => "TYPE_MISMATCH",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single reported rule breach
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Rule broken
    pub kind: ViolationKind,
    /// Position of the offending record within the batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_index: Option<usize>,
    /// The record's identifier value, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// Offending field name, where applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Expected type class or condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Actual runtime type found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    /// Human-readable description
    pub message: String,
}

impl Violation {
    /// Batch reference absent
    pub fn missing_batch() -> Self {
        Self {
            kind: ViolationKind::MissingBatch,
            record_index: None,
            record_id: None,
            field: None,
            expected: None,
            actual: None,
            message: "No batch of records was provided".into(),
        }
    }

    /// Batch value is not a sequence
    pub fn malformed_batch(actual: &str) -> Self {
        Self {
            kind: ViolationKind::MalformedBatch,
            record_index: None,
            record_id: None,
            field: None,
            expected: Some("array of records".into()),
            actual: Some(actual.into()),
            message: format!("Batch must be an array of records, got {}", actual),
        }
    }

    /// A batch element is not a record-like mapping
    pub fn malformed_record(index: usize, actual: &str) -> Self {
        Self {
            kind: ViolationKind::MalformedBatch,
            record_index: Some(index),
            record_id: None,
            field: None,
            expected: Some("object".into()),
            actual: Some(actual.into()),
            message: format!("Record at index {} is not an object, got {}", index, actual),
        }
    }

    /// Batch has zero records
    pub fn empty_batch() -> Self {
        Self {
            kind: ViolationKind::EmptyBatch,
            record_index: None,
            record_id: None,
            field: None,
            expected: None,
            actual: None,
            message: "Batch contains no records".into(),
        }
    }

    /// A record lacks the identifier key
    pub fn missing_identifier(index: usize, field: &str, record: &Map<String, Value>) -> Self {
        let content = serde_json::to_string(record).unwrap_or_else(|_| "<unrenderable>".into());
        Self {
            kind: ViolationKind::MissingIdentifier,
            record_index: Some(index),
            record_id: None,
            field: Some(field.into()),
            expected: None,
            actual: None,
            message: format!(
                "Required ID field '{}' missing in record at index {}: {}",
                field, index, content
            ),
        }
    }

    /// A record lacks a required feature key
    pub fn missing_feature(index: usize, record_id: Option<String>, field: &str) -> Self {
        Self {
            kind: ViolationKind::MissingFeature,
            record_index: Some(index),
            record_id,
            field: Some(field.into()),
            expected: None,
            actual: None,
            message: format!(
                "Required feature '{}' missing in record at index {}",
                field, index
            ),
        }
    }

    /// A present feature holds a value outside its declared class
    pub fn type_mismatch(
        index: usize,
        record_id: Option<String>,
        field: &str,
        expected: &str,
        actual: &str,
    ) -> Self {
        Self {
            kind: ViolationKind::TypeMismatch,
            record_index: Some(index),
            record_id,
            field: Some(field.into()),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
            message: format!(
                "Feature '{}' in record at index {} must be {}, got {}",
                field, index, expected, actual
            ),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// The rejected half of a validation outcome: one or more violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRejection {
    violations: Vec<Violation>,
}

impl BatchRejection {
    /// Wrap a collected violation list
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Wrap a single violation
    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    /// Returns all violations in reporting order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the number of violations
    pub fn count(&self) -> usize {
        self.violations.len()
    }
}

impl fmt::Display for BatchRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "batch rejected with {} violation(s)", self.violations.len())?;
        if let Some(first) = self.violations.first() {
            write!(f, "; first: {}", first)?;
        }
        Ok(())
    }
}

impl std::error::Error for BatchRejection {}

//! Batch validator for inference input
//!
//! Validation semantics:
//! - Batch-level shape checks run first and fail fast
//! - Per-record checks accumulate every violation across the whole batch
//! - Accepted batches pass through unchanged
//!
//! Forbidden behaviors:
//! - Implicit type coercion
//! - Mutating records
//! - Stopping a record's feature scan at its first missing feature
//! - Treating booleans as numeric or categorical encodings

use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::schema::InferenceSchema;

use super::violation::{
    BatchRejection, Violation, NUMERIC_OR_NULL, STRING_NUMERIC_OR_NULL,
};

/// Schema-specialized batch checker, built once and reused per batch.
///
/// The factory captures the descriptor's identifier name and feature sets
/// by value, so the validator's behavior is frozen at build time even if
/// the descriptor is later replaced. The validator holds no mutable state
/// and is safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct BatchValidator {
    id_field: String,
    features: BTreeSet<String>,
    numeric_features: BTreeSet<String>,
    categorical_features: BTreeSet<String>,
}

impl BatchValidator {
    /// Builds a validator specialized to the given descriptor.
    ///
    /// Pure function of its input; the descriptor is not mutated. There
    /// are no error conditions: structural consistency is the loader's
    /// responsibility and has already been enforced.
    pub fn new(schema: &InferenceSchema) -> Self {
        Self {
            id_field: schema.id_field.clone(),
            features: schema.features.clone(),
            numeric_features: schema.numeric_features.clone(),
            categorical_features: schema.categorical_features.clone(),
        }
    }

    /// Validates a batch of untyped records.
    ///
    /// `batch` is the value found at the request's batch key, or `None`
    /// if the key was absent. On acceptance the original records are
    /// returned unchanged; on rejection every violation found is
    /// reported together.
    ///
    /// Check order is fixed: batch shape (fail fast), then per record:
    /// identifier presence, required-feature presence, type classes.
    pub fn validate<'a>(&self, batch: Option<&'a Value>) -> Result<&'a [Value], BatchRejection> {
        // An explicit null is the same absence as a missing key
        let value = match batch {
            Some(v) if !v.is_null() => v,
            _ => return Err(BatchRejection::single(Violation::missing_batch())),
        };

        let records = match value.as_array() {
            Some(records) => records,
            None => {
                return Err(BatchRejection::single(Violation::malformed_batch(
                    json_type_name(value),
                )))
            }
        };

        if records.is_empty() {
            return Err(BatchRejection::single(Violation::empty_batch()));
        }

        // A non-mapping element is a batch-level shape failure: per-record
        // checks assume mappings and do not run.
        if let Some((index, bad)) = records.iter().enumerate().find(|(_, r)| !r.is_object()) {
            return Err(BatchRejection::single(Violation::malformed_record(
                index,
                json_type_name(bad),
            )));
        }

        let mut violations = Vec::new();
        for (index, record) in records.iter().enumerate() {
            if let Some(row) = record.as_object() {
                self.check_record(index, row, &mut violations);
            }
        }

        if violations.is_empty() {
            Ok(records)
        } else {
            Err(BatchRejection::new(violations))
        }
    }

    /// Runs all per-record checks, appending every violation found.
    fn check_record(
        &self,
        index: usize,
        record: &Map<String, Value>,
        violations: &mut Vec<Violation>,
    ) {
        // Presence of the key is what's checked; a null identifier value
        // still satisfies the check.
        let record_id = record.get(&self.id_field).map(identifier_string);
        if !record.contains_key(&self.id_field) {
            violations.push(Violation::missing_identifier(index, &self.id_field, record));
        }

        // Every missing feature of a record is reported, not just the first.
        for feature in &self.features {
            if !record.contains_key(feature) {
                violations.push(Violation::missing_feature(index, record_id.clone(), feature));
            }
        }

        // Type checks apply only to features that are present; absence was
        // already reported above.
        for feature in &self.numeric_features {
            if let Some(value) = record.get(feature) {
                if !numeric_or_null(value) {
                    violations.push(Violation::type_mismatch(
                        index,
                        record_id.clone(),
                        feature,
                        NUMERIC_OR_NULL,
                        json_type_name(value),
                    ));
                }
            }
        }

        for feature in &self.categorical_features {
            if let Some(value) = record.get(feature) {
                if !categorical_or_null(value) {
                    violations.push(Violation::type_mismatch(
                        index,
                        record_id.clone(),
                        feature,
                        STRING_NUMERIC_OR_NULL,
                        json_type_name(value),
                    ));
                }
            }
        }
    }
}

/// Accepted shapes for a numeric feature value.
///
/// Booleans are not numbers here, even though some runtimes alias them
/// to integers.
fn numeric_or_null(value: &Value) -> bool {
    match value {
        Value::Null | Value::Number(_) => true,
        Value::Bool(_) | Value::String(_) | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Accepted shapes for a categorical feature value.
///
/// Numbers are allowed because categorical values may arrive pre-encoded
/// as integers or floats. Booleans are excluded.
fn categorical_or_null(value: &Value) -> bool {
    match value {
        Value::Null | Value::Number(_) | Value::String(_) => true,
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Returns the JSON type name for diagnostics.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders an identifier value for violation locations.
fn identifier_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

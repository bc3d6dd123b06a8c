//! Batch Validation Invariant Tests
//!
//! - Batch shape checks run before per-record checks
//! - Every per-record violation is collected and reported together
//! - Accepted batches pass through unchanged
//! - Validation is deterministic and idempotent

use infergate::schema::InferenceSchema;
use infergate::validation::{BatchValidator, ViolationKind};
use serde_json::{json, Value};
use std::collections::BTreeSet;

// =============================================================================
// Helper Functions
// =============================================================================

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// The reference schema used throughout: id + numeric age + categorical city.
fn setup_validator() -> BatchValidator {
    let schema = InferenceSchema::new(
        "id",
        set(&["age", "city"]),
        set(&["age"]),
        set(&["city"]),
    );
    schema.validate_structure().unwrap();
    BatchValidator::new(&schema)
}

fn kinds(validator: &BatchValidator, batch: &Value) -> Vec<ViolationKind> {
    validator
        .validate(Some(batch))
        .unwrap_err()
        .violations()
        .iter()
        .map(|v| v.kind)
        .collect()
}

// =============================================================================
// Acceptance / Identity Tests
// =============================================================================

/// A fully conforming batch passes through with contents unchanged.
#[test]
fn test_conforming_batch_is_identity() {
    let validator = setup_validator();
    let batch = json!([
        {"id": 1, "age": 30, "city": "NYC"},
        {"id": 2, "age": 41.5, "city": "LA"},
        {"id": 3, "age": null, "city": 7}
    ]);

    let accepted = validator.validate(Some(&batch)).unwrap();
    assert_eq!(accepted, batch.as_array().unwrap().as_slice());
}

/// Extra undeclared fields are not this validator's concern.
#[test]
fn test_extra_fields_are_ignored() {
    let validator = setup_validator();
    let batch = json!([{"id": 1, "age": 30, "city": "NYC", "note": "vip"}]);
    assert!(validator.validate(Some(&batch)).is_ok());
}

/// Null numeric and numerically-encoded categorical values are both valid.
#[test]
fn test_null_numeric_and_encoded_categorical() {
    let validator = setup_validator();
    let batch = json!([{"id": 1, "age": null, "city": 7}]);
    assert!(validator.validate(Some(&batch)).is_ok());
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same batch validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let validator = setup_validator();
    let batch = json!([{"id": 1, "age": 30, "city": "NYC"}]);

    for _ in 0..100 {
        assert!(validator.validate(Some(&batch)).is_ok());
    }
}

/// Invalid batch fails with the identical violation set every time.
#[test]
fn test_rejection_is_idempotent() {
    let validator = setup_validator();
    let batch = json!([{"age": true}]);

    let first = validator.validate(Some(&batch)).unwrap_err();
    for _ in 0..100 {
        let again = validator.validate(Some(&batch)).unwrap_err();
        assert_eq!(first, again);
    }
}

/// Two validators built from the same schema agree on every outcome.
#[test]
fn test_validators_from_same_schema_agree() {
    let first = setup_validator();
    let second = setup_validator();
    let batch = json!([{"id": 1, "city": 3.5}]);

    assert_eq!(
        first.validate(Some(&batch)).unwrap_err(),
        second.validate(Some(&batch)).unwrap_err()
    );
}

// =============================================================================
// Batch-Level Shape Tests
// =============================================================================

/// An absent or null batch is its own violation kind.
#[test]
fn test_missing_batch() {
    let validator = setup_validator();

    let rejection = validator.validate(None).unwrap_err();
    assert_eq!(rejection.count(), 1);
    assert_eq!(rejection.violations()[0].kind, ViolationKind::MissingBatch);

    let null_batch = json!(null);
    let rejection = validator.validate(Some(&null_batch)).unwrap_err();
    assert_eq!(rejection.violations()[0].kind, ViolationKind::MissingBatch);
}

/// A non-sequence batch is malformed, regardless of schema.
#[test]
fn test_malformed_batch_value() {
    let validator = setup_validator();
    for batch in [json!(42), json!("rows"), json!({"id": 1})] {
        let rejection = validator.validate(Some(&batch)).unwrap_err();
        assert_eq!(rejection.count(), 1);
        assert_eq!(rejection.violations()[0].kind, ViolationKind::MalformedBatch);
    }
}

/// An empty batch yields exactly one EmptyBatch violation.
#[test]
fn test_empty_batch() {
    let validator = setup_validator();
    let rejection = validator.validate(Some(&json!([]))).unwrap_err();
    assert_eq!(rejection.count(), 1);
    assert_eq!(rejection.violations()[0].kind, ViolationKind::EmptyBatch);
}

/// A non-mapping record fails the whole batch; per-record checks never run.
#[test]
fn test_non_mapping_record_short_circuits() {
    let validator = setup_validator();
    // The first record would produce violations of its own if scanned
    let batch = json!([{"age": "x"}, [1, 2, 3]]);
    let rejection = validator.validate(Some(&batch)).unwrap_err();

    assert_eq!(rejection.count(), 1);
    let violation = &rejection.violations()[0];
    assert_eq!(violation.kind, ViolationKind::MalformedBatch);
    assert_eq!(violation.record_index, Some(1));
}

// =============================================================================
// Per-Record Accumulation Tests
// =============================================================================

/// A record missing two required features yields two violations.
#[test]
fn test_no_short_circuit_within_record() {
    let validator = setup_validator();
    let batch = json!([{"id": 1}]);
    let rejection = validator.validate(Some(&batch)).unwrap_err();

    let fields: Vec<_> = rejection
        .violations()
        .iter()
        .filter(|v| v.kind == ViolationKind::MissingFeature)
        .filter_map(|v| v.field.as_deref())
        .collect();
    assert_eq!(fields, vec!["age", "city"]);
}

/// Violations accumulate across every record of the batch.
#[test]
fn test_all_records_scanned() {
    let validator = setup_validator();
    let batch = json!([
        {"age": 30, "city": "NYC"},
        {"id": 2, "age": "thirty", "city": "LA"},
        {"id": 3, "age": 28, "city": true}
    ]);

    assert_eq!(
        kinds(&validator, &batch),
        vec![
            ViolationKind::MissingIdentifier,
            ViolationKind::TypeMismatch,
            ViolationKind::TypeMismatch,
        ]
    );
}

/// The identifier check is about key presence, not value validity.
#[test]
fn test_identifier_presence_only() {
    let validator = setup_validator();
    let batch = json!([{"id": null, "age": 30, "city": "NYC"}]);
    assert!(validator.validate(Some(&batch)).is_ok());
}

/// MissingIdentifier names the field and embeds the record content.
#[test]
fn test_missing_identifier_diagnostics() {
    let validator = setup_validator();
    let batch = json!([{"age": 30, "city": "NYC"}]);
    let rejection = validator.validate(Some(&batch)).unwrap_err();

    let violation = &rejection.violations()[0];
    assert_eq!(violation.kind, ViolationKind::MissingIdentifier);
    assert_eq!(violation.record_index, Some(0));
    assert!(violation.message.contains("'id'"));
    assert!(violation.message.contains("NYC"));
}

// =============================================================================
// Type Class Tests
// =============================================================================

/// Numeric features accept null, int, and float only.
#[test]
fn test_numeric_accepted_shapes() {
    let validator = setup_validator();
    for age in [json!(null), json!(30), json!(41.5), json!(-3)] {
        let batch = json!([{"id": 1, "age": age, "city": "NYC"}]);
        assert!(validator.validate(Some(&batch)).is_ok());
    }
}

/// Booleans are rejected for numeric features.
#[test]
fn test_numeric_rejects_boolean() {
    let validator = setup_validator();
    let batch = json!([{"id": 1, "age": true, "city": "NYC"}]);
    let rejection = validator.validate(Some(&batch)).unwrap_err();

    assert_eq!(rejection.count(), 1);
    let violation = &rejection.violations()[0];
    assert_eq!(violation.kind, ViolationKind::TypeMismatch);
    assert_eq!(violation.expected.as_deref(), Some("numeric or null"));
    assert_eq!(violation.actual.as_deref(), Some("bool"));
}

/// Booleans are rejected for categorical features too.
#[test]
fn test_categorical_rejects_boolean() {
    let validator = setup_validator();
    let batch = json!([{"id": 1, "age": 30, "city": true}]);
    let rejection = validator.validate(Some(&batch)).unwrap_err();

    assert_eq!(rejection.count(), 1);
    assert_eq!(
        rejection.violations()[0].expected.as_deref(),
        Some("string, numeric, or null")
    );
}

/// The concrete scenario from the contract: one string-typed age.
#[test]
fn test_single_type_mismatch_scenario() {
    let validator = setup_validator();
    let batch = json!([
        {"id": 1, "age": 30, "city": "NYC"},
        {"id": 2, "age": "thirty", "city": "LA"}
    ]);

    let rejection = validator.validate(Some(&batch)).unwrap_err();
    assert_eq!(rejection.count(), 1);
    let violation = &rejection.violations()[0];
    assert_eq!(violation.kind, ViolationKind::TypeMismatch);
    assert_eq!(violation.record_index, Some(1));
    assert_eq!(violation.field.as_deref(), Some("age"));
    assert_eq!(violation.expected.as_deref(), Some("numeric or null"));
    assert_eq!(violation.actual.as_deref(), Some("string"));
}

/// Absent classified features report absence, never a type mismatch.
#[test]
fn test_type_check_skipped_for_absent_features() {
    let validator = setup_validator();
    let batch = json!([{"id": 1}]);

    assert!(kinds(&validator, &batch)
        .iter()
        .all(|k| *k == ViolationKind::MissingFeature));
}

// =============================================================================
// Factory Capture Tests
// =============================================================================

/// A built validator is frozen even if the descriptor changes afterwards.
#[test]
fn test_schema_capture_at_build_time() {
    let mut schema = InferenceSchema::new(
        "id",
        set(&["age"]),
        set(&["age"]),
        set(&[]),
    );
    let validator = BatchValidator::new(&schema);

    schema.features.insert("city".to_string());
    schema.numeric_features.insert("city".to_string());

    let batch = json!([{"id": 1, "age": 30}]);
    assert!(validator.validate(Some(&batch)).is_ok());
}

/// Unclassified features are presence-checked only.
#[test]
fn test_presence_only_feature() {
    let schema = InferenceSchema::new(
        "id",
        set(&["age", "note"]),
        set(&["age"]),
        set(&[]),
    );
    let validator = BatchValidator::new(&schema);

    // Any value shape satisfies an unclassified feature
    let batch = json!([{"id": 1, "age": 30, "note": {"nested": true}}]);
    assert!(validator.validate(Some(&batch)).is_ok());

    let batch = json!([{"id": 1, "age": 30}]);
    let rejection = validator.validate(Some(&batch)).unwrap_err();
    assert_eq!(rejection.count(), 1);
    assert_eq!(rejection.violations()[0].field.as_deref(), Some("note"));
}

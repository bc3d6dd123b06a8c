//! Schema loader
//!
//! Reads a schema descriptor from a JSON file at startup. The descriptor is
//! loaded once per process and treated as frozen afterwards; any failure
//! here is fatal, never deferred to request time.

use std::fs;
use std::path::Path;

use super::errors::{SchemaError, SchemaResult};
use super::types::InferenceSchema;

/// Loads and verifies schema descriptors from disk.
pub struct SchemaLoader;

impl SchemaLoader {
    /// Loads a descriptor from the given JSON file.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the file cannot be read, is not a valid
    /// descriptor document, or fails structural validation.
    pub fn load(path: &Path) -> SchemaResult<InferenceSchema> {
        let content = fs::read_to_string(path)
            .map_err(|e| SchemaError::unreadable(path.display().to_string(), e.to_string()))?;

        let schema: InferenceSchema = serde_json::from_str(&content)
            .map_err(|e| SchemaError::malformed(path.display().to_string(), e.to_string()))?;

        schema
            .validate_structure()
            .map_err(SchemaError::inconsistent)?;

        Ok(schema)
    }

    /// Verifies an in-memory descriptor (for programmatic construction).
    pub fn verify(schema: &InferenceSchema) -> SchemaResult<()> {
        schema
            .validate_structure()
            .map_err(SchemaError::inconsistent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::errors::SchemaErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_schema_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_schema() {
        let file = write_schema_file(
            r#"{
                "id_field": "id",
                "features": ["age", "city"],
                "numeric_features": ["age"],
                "categorical_features": ["city"]
            }"#,
        );

        let schema = SchemaLoader::load(file.path()).unwrap();
        assert_eq!(schema.id_field, "id");
        assert_eq!(schema.feature_count(), 2);
        assert!(schema.numeric_features.contains("age"));
        assert!(schema.categorical_features.contains("city"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SchemaLoader::load(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::GateSchemaUnreadable);
    }

    #[test]
    fn test_load_invalid_json() {
        let file = write_schema_file("{ not json");
        let err = SchemaLoader::load(file.path()).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::GateSchemaMalformed);
    }

    #[test]
    fn test_load_inconsistent_descriptor() {
        // "age" declared numeric but not a feature
        let file = write_schema_file(
            r#"{
                "id_field": "id",
                "features": ["city"],
                "numeric_features": ["age"]
            }"#,
        );

        let err = SchemaLoader::load(file.path()).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::GateSchemaInconsistent);
        assert!(err.message().contains("age"));
    }

    #[test]
    fn test_load_overlapping_classes_rejected() {
        let file = write_schema_file(
            r#"{
                "id_field": "id",
                "features": ["age"],
                "numeric_features": ["age"],
                "categorical_features": ["age"]
            }"#,
        );

        let err = SchemaLoader::load(file.path()).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::GateSchemaInconsistent);
    }
}

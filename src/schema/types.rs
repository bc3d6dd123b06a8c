//! Schema descriptor for inference input
//!
//! A schema names the identifier field every record must carry, the set of
//! required features, and the type class (numeric or categorical) expected
//! for each classified feature. The descriptor is immutable once loaded;
//! validators capture its contents at build time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Declarative description of the records a deployment accepts.
///
/// Feature sets are ordered (BTreeSet) so that violation reporting is
/// deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceSchema {
    /// Name of the field that uniquely identifies a record
    pub id_field: String,
    /// Feature names every record must carry
    pub features: BTreeSet<String>,
    /// Subset of `features` expected to hold numeric values (or null)
    #[serde(default)]
    pub numeric_features: BTreeSet<String>,
    /// Subset of `features` expected to hold string, integer, or float
    /// encodings (or null)
    #[serde(default)]
    pub categorical_features: BTreeSet<String>,
}

impl InferenceSchema {
    /// Create a new schema descriptor
    pub fn new(
        id_field: impl Into<String>,
        features: BTreeSet<String>,
        numeric_features: BTreeSet<String>,
        categorical_features: BTreeSet<String>,
    ) -> Self {
        Self {
            id_field: id_field.into(),
            features,
            numeric_features,
            categorical_features,
        }
    }

    /// Validates the descriptor itself (not a batch).
    ///
    /// A descriptor that fails here must never reach a validator build:
    /// - `id_field` must be non-empty and not listed among the features
    /// - classified sets must be subsets of `features`
    /// - a feature may not be both numeric and categorical
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.id_field.is_empty() {
            return Err("Schema must name a non-empty id_field".into());
        }

        if self.features.contains(&self.id_field) {
            return Err(format!(
                "id_field '{}' must not be listed among the features",
                self.id_field
            ));
        }

        for name in &self.numeric_features {
            if !self.features.contains(name) {
                return Err(format!(
                    "Numeric feature '{}' is not a declared feature",
                    name
                ));
            }
        }

        for name in &self.categorical_features {
            if !self.features.contains(name) {
                return Err(format!(
                    "Categorical feature '{}' is not a declared feature",
                    name
                ));
            }
        }

        if let Some(name) = self
            .numeric_features
            .intersection(&self.categorical_features)
            .next()
        {
            return Err(format!(
                "Feature '{}' is declared both numeric and categorical",
                name
            ));
        }

        Ok(())
    }

    /// Returns the number of declared features
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

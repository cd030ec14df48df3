//! Central schema registry for the Tale wire types.
//!
//! The `SchemaRegistry` builds JSON Schemas from tale-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Registered schema names.
pub mod names {
    pub const TASK_ENVELOPE: &str = "task_envelope";
    pub const TASK_CONTEXT: &str = "task_context";
    pub const INTERACTION_ANSWERS: &str = "interaction_answers";
    pub const DESCRIPTION_ANSWERS: &str = "description_answers";
    pub const SAFETY_ANSWERS: &str = "safety_answers";
    pub const EVENT: &str = "event";
    pub const CONSTRAINT: &str = "constraint";
    pub const INTERACTION_SUBMISSION: &str = "interaction_submission";
    pub const DESCRIPTION_SUBMISSION: &str = "description_submission";
    pub const SAFETY_SUBMISSION: &str = "safety_submission";
}

/// Central store of all JSON Schemas for Tale wire types.
///
/// Provides lookup by name and validation of arbitrary JSON values against
/// registered schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing the inbound, answer, vocabulary, and
    /// submission schemas from tale-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema, which `schemars` output never does in practice.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Inbound (2) ---
        register!(
            schemas,
            names::TASK_ENVELOPE,
            tale_core::lifecycle::TaskEnvelope
        );
        register!(
            schemas,
            names::TASK_CONTEXT,
            tale_core::context::TaskContext
        );

        // --- Answer sets (3) ---
        register!(
            schemas,
            names::INTERACTION_ANSWERS,
            tale_core::answers::InteractionAnswers
        );
        register!(
            schemas,
            names::DESCRIPTION_ANSWERS,
            tale_core::answers::DescriptionAnswers
        );
        register!(
            schemas,
            names::SAFETY_ANSWERS,
            tale_core::answers::SafetyAnswers
        );

        // --- Vocabulary (2) ---
        register!(schemas, names::EVENT, tale_core::events::Event);
        register!(schemas, names::CONSTRAINT, tale_core::events::Constraint);

        // --- Submissions (3) ---
        register!(
            schemas,
            names::INTERACTION_SUBMISSION,
            tale_core::submission::InteractionSubmission
        );
        register!(
            schemas,
            names::DESCRIPTION_SUBMISSION,
            tale_core::submission::DescriptionSubmission
        );
        register!(
            schemas,
            names::SAFETY_SUBMISSION,
            tale_core::submission::SafetySubmission
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

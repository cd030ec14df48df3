use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SafetyCategory;

/// Answers for the safety/context labelling task.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct SafetyAnswers {
    pub is_safe: Option<bool>,
    /// Selected categories, in selection order. Only asked when unsafe.
    pub unsafe_categories: Vec<SafetyCategory>,
    /// Whether the narration would be acceptable in a different setting.
    pub is_context_dependent: Option<bool>,
    /// Why the context matters. Only asked when context dependent.
    pub rationale: String,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::context::{AttributeValue, TaskContext};
use crate::enums::{ObjectRole, TargetTag};

/// The entity a user says the interaction creates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreatedEntity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub location: Option<TargetTag>,
}

/// One row of the attribute editor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttributeChange {
    pub target: ObjectRole,
    pub name: String,
    pub value: AttributeValue,
}

/// Answers for the object-interaction narration task.
///
/// Tri-state questions are `Option<bool>`: `None` means the user has not
/// clicked yes or no yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct InteractionAnswers {
    /// Third-person rewrite of the narration.
    pub broadcast_message: String,

    pub is_removing_objects: Option<bool>,
    /// Removed object names, in the order they were selected.
    pub removed_objects: Vec<String>,

    pub is_creating_entity: Option<bool>,
    pub created_entity: CreatedEntity,

    pub is_changing_description: Option<bool>,
    pub primary_description: String,
    pub secondary_description: String,

    pub is_changing_location: Option<bool>,
    pub primary_destination: Option<TargetTag>,
    pub secondary_destination: Option<TargetTag>,

    pub attribute_changes: Vec<AttributeChange>,
    pub attribute_constraints: Vec<AttributeChange>,

    pub is_secondary_held: Option<bool>,
    pub is_location_constrained: Option<bool>,
    pub constraint_location: String,

    pub is_reversible: Option<bool>,
    pub is_infinite: Option<bool>,
    pub times_remaining: Option<u32>,
}

impl InteractionAnswers {
    /// Answers as the task view shows them on mount: narration and both
    /// descriptions seeded with the current text.
    #[must_use]
    pub fn prefilled(ctx: &TaskContext) -> Self {
        Self {
            broadcast_message: ctx.narration.clone(),
            primary_description: ctx.primary.description.clone(),
            secondary_description: ctx.secondary.description.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(&self, role: ObjectRole) -> &str {
        match role {
            ObjectRole::Primary => &self.primary_description,
            ObjectRole::Secondary => &self.secondary_description,
        }
    }

    #[must_use]
    pub const fn destination(&self, role: ObjectRole) -> Option<TargetTag> {
        match role {
            ObjectRole::Primary => self.primary_destination,
            ObjectRole::Secondary => self.secondary_destination,
        }
    }
}

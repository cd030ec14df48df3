//! Task context supplied by the task-hosting runtime.
//!
//! The context is created once when a task loads and is read-only for the
//! rest of the session.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ObjectRole;

/// A scalar attribute value as the world engine stores it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum AttributeValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A named attribute on a world object.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

/// An object, character, or location under discussion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorldObject {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl WorldObject {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            attributes: Vec::new(),
        }
    }
}

/// Everything a task session is asked about.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskContext {
    /// The object being used.
    pub primary: WorldObject,
    /// The object the primary one is used on.
    pub secondary: WorldObject,
    /// Base narration of the interaction, written from the actor's point of view.
    pub narration: String,
    /// Room the interaction happens in, if known.
    #[serde(default)]
    pub room_name: String,
    /// Other objects present in the room, offered in selection lists.
    #[serde(default)]
    pub room_objects: Vec<String>,
}

impl TaskContext {
    /// The two objects under discussion, primary first.
    #[must_use]
    pub fn objects(&self) -> [&WorldObject; 2] {
        [&self.primary, &self.secondary]
    }

    #[must_use]
    pub const fn object(&self, role: ObjectRole) -> &WorldObject {
        match role {
            ObjectRole::Primary => &self.primary,
            ObjectRole::Secondary => &self.secondary,
        }
    }

    /// Names offered in the "which objects are removed" selection list.
    ///
    /// Primary and secondary first, then room objects, without duplicates.
    #[must_use]
    pub fn removable_objects(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(2 + self.room_objects.len());
        let candidates = [self.primary.name.as_str(), self.secondary.name.as_str()]
            .into_iter()
            .chain(self.room_objects.iter().map(String::as_str));
        for name in candidates {
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

//! Submission payloads handed to the task-hosting runtime.
//!
//! Payloads are built fresh on every successful submit and never mutated.
//! They carry no timestamps, so the same answers always produce the same JSON.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{SafetyCategory, SafetyLabel};
use crate::events::{Constraint, Event};

/// Marker serialized as the literal string `"inf"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Unbounded {
    #[serde(rename = "inf")]
    Inf,
}

/// How many more times an interaction can happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TimesRemaining {
    Count(u32),
    Infinite(Unbounded),
}

impl TimesRemaining {
    pub const INFINITE: Self = Self::Infinite(Unbounded::Inf);

    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite(_))
    }
}

/// Payload for the object-interaction task.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InteractionSubmission {
    pub events: Vec<Event>,
    pub constraints: Vec<Constraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times_remaining: Option<TimesRemaining>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reversible: Option<bool>,
}

/// Before/after description of one object.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DescribedObject {
    pub name: String,
    pub before: String,
    pub after: String,
    pub tags: Vec<String>,
}

/// Payload for the description task, in context object order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DescriptionSubmission {
    pub objects: Vec<DescribedObject>,
}

/// Payload for the safety labelling task.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SafetySubmission {
    pub label: SafetyLabel,
    pub categories: Vec<SafetyCategory>,
    pub context_dependent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn infinite_serializes_as_string() {
        assert_eq!(
            serde_json::to_value(TimesRemaining::INFINITE).unwrap(),
            json!("inf")
        );
        assert_eq!(
            serde_json::to_value(TimesRemaining::Count(3)).unwrap(),
            json!(3)
        );
    }

    #[test]
    fn times_remaining_deserializes_both_forms() {
        let inf: TimesRemaining = serde_json::from_str("\"inf\"").unwrap();
        assert!(inf.is_infinite());
        let count: TimesRemaining = serde_json::from_str("2").unwrap();
        assert_eq!(count, TimesRemaining::Count(2));
        assert!(serde_json::from_str::<TimesRemaining>("\"forever\"").is_err());
    }

    #[test]
    fn optional_fields_are_omitted() {
        let json = serde_json::to_value(InteractionSubmission::default()).unwrap();
        assert_eq!(json, json!({"events": [], "constraints": []}));
    }
}

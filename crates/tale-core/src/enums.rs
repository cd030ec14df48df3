//! Tags, roles, vocabularies, and states for Tale.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! which is also the spelling the world engine expects on the wire.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TargetTag
// ---------------------------------------------------------------------------

/// Where an event or constraint applies, relative to the acting character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TargetTag {
    InUsedItem,
    InUsedTargetItem,
    InRoom,
    InActor,
}

impl TargetTag {
    pub const ALL: [Self; 4] = [
        Self::InUsedItem,
        Self::InUsedTargetItem,
        Self::InRoom,
        Self::InActor,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InUsedItem => "in_used_item",
            Self::InUsedTargetItem => "in_used_target_item",
            Self::InRoom => "in_room",
            Self::InActor => "in_actor",
        }
    }
}

impl fmt::Display for TargetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ObjectRole
// ---------------------------------------------------------------------------

/// Which of the two objects under discussion a field refers to.
///
/// The primary object is the one being used; the secondary object is the one
/// it is used on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ObjectRole {
    Primary,
    Secondary,
}

impl ObjectRole {
    /// The target tag the world engine uses for this object.
    #[must_use]
    pub const fn target_tag(self) -> TargetTag {
        match self {
            Self::Primary => TargetTag::InUsedItem,
            Self::Secondary => TargetTag::InUsedTargetItem,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for ObjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventType
// ---------------------------------------------------------------------------

/// The event vocabulary replayed by the world engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    BroadcastMessage,
    RemoveObject,
    CreateEntity,
    ModifyAttribute,
}

impl EventType {
    pub const ALL: [Self; 4] = [
        Self::BroadcastMessage,
        Self::RemoveObject,
        Self::CreateEntity,
        Self::ModifyAttribute,
    ];

    /// Keys that must be present in the `params` object of this event.
    #[must_use]
    pub const fn required_params(self) -> &'static [&'static str] {
        match self {
            Self::BroadcastMessage => &["self_view", "room_view"],
            Self::RemoveObject => &["name"],
            Self::CreateEntity => &["type", "object"],
            Self::ModifyAttribute => &["type", "key", "value"],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BroadcastMessage => "broadcast_message",
            Self::RemoveObject => "remove_object",
            Self::CreateEntity => "create_entity",
            Self::ModifyAttribute => "modify_attribute",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConstraintType
// ---------------------------------------------------------------------------

/// The constraint vocabulary checked by the world engine before an interaction runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintType {
    AttributeCompareValue,
    IsHolding,
    InRoom,
}

impl ConstraintType {
    pub const ALL: [Self; 3] = [Self::AttributeCompareValue, Self::IsHolding, Self::InRoom];

    /// Keys that must be present in the `params` object of this constraint.
    #[must_use]
    pub const fn required_params(self) -> &'static [&'static str] {
        match self {
            Self::AttributeCompareValue => &["type", "key", "list", "cmp_type"],
            Self::IsHolding => &["complement"],
            Self::InRoom => &["room_name"],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AttributeCompareValue => "attribute_compare_value",
            Self::IsHolding => "is_holding",
            Self::InRoom => "in_room",
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CmpType
// ---------------------------------------------------------------------------

/// Comparison operator for `attribute_compare_value`. Only equality is collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CmpType {
    #[default]
    Eq,
}

// ---------------------------------------------------------------------------
// TaskKind
// ---------------------------------------------------------------------------

/// The crowdsourcing task variants that share the submission pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Narrate an interaction between two objects and record its effects.
    #[default]
    Interaction,
    /// Rewrite object/character descriptions and tag them.
    Description,
    /// Label a narration as safe or unsafe in context.
    Safety,
}

impl TaskKind {
    pub const ALL: [Self; 3] = [Self::Interaction, Self::Description, Self::Safety];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interaction => "interaction",
            Self::Description => "description",
            Self::Safety => "safety",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownTaskKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SafetyCategory / SafetyLabel
// ---------------------------------------------------------------------------

/// Reasons a narration can be labelled unsafe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SafetyCategory {
    Violence,
    Sexual,
    Hate,
    SelfHarm,
    Profanity,
    Other,
}

impl SafetyCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Violence => "violence",
            Self::Sexual => "sexual",
            Self::Hate => "hate",
            Self::SelfHarm => "self_harm",
            Self::Profanity => "profanity",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SafetyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall verdict recorded by the safety task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SafetyLabel {
    Safe,
    Unsafe,
}

// ---------------------------------------------------------------------------
// SubmissionState
// ---------------------------------------------------------------------------

/// Lifecycle of one task session's form.
///
/// ```text
/// editing → submitted
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitted,
}

impl SubmissionState {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Editing => &[Self::Submitted],
            Self::Submitted => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Move to `next`, or fail if the state machine does not allow it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` when `next` is not reachable from `self`.
    pub fn transition(self, next: Self) -> Result<Self, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition {
                entity: "submission",
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Submitted => "submitted",
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(
        tag_in_used_target_item,
        TargetTag,
        TargetTag::InUsedTargetItem,
        "in_used_target_item"
    );
    test_serde_roundtrip!(tag_in_actor, TargetTag, TargetTag::InActor, "in_actor");
    test_serde_roundtrip!(
        event_broadcast,
        EventType,
        EventType::BroadcastMessage,
        "broadcast_message"
    );
    test_serde_roundtrip!(
        constraint_compare,
        ConstraintType,
        ConstraintType::AttributeCompareValue,
        "attribute_compare_value"
    );
    test_serde_roundtrip!(cmp_eq, CmpType, CmpType::Eq, "eq");
    test_serde_roundtrip!(
        safety_self_harm,
        SafetyCategory,
        SafetyCategory::SelfHarm,
        "self_harm"
    );

    #[test]
    fn display_matches_serde_spelling() {
        for tag in TargetTag::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{tag}\""));
        }
        for event in EventType::ALL {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{event}\""));
        }
        for constraint in ConstraintType::ALL {
            let json = serde_json::to_string(&constraint).unwrap();
            assert_eq!(json, format!("\"{constraint}\""));
        }
    }

    #[test]
    fn roles_map_to_used_item_tags() {
        assert_eq!(ObjectRole::Primary.target_tag(), TargetTag::InUsedItem);
        assert_eq!(
            ObjectRole::Secondary.target_tag(),
            TargetTag::InUsedTargetItem
        );
    }

    #[test]
    fn task_kind_parses_loosely() {
        assert_eq!("interaction".parse::<TaskKind>(), Ok(TaskKind::Interaction));
        assert_eq!(" Safety ".parse::<TaskKind>(), Ok(TaskKind::Safety));
        assert_eq!(
            "map".parse::<TaskKind>(),
            Err(CoreError::UnknownTaskKind("map".into()))
        );
    }

    #[test]
    fn submission_valid_transitions() {
        assert!(SubmissionState::Editing.can_transition_to(SubmissionState::Submitted));
        assert_eq!(
            SubmissionState::Editing.transition(SubmissionState::Submitted),
            Ok(SubmissionState::Submitted)
        );
    }

    #[test]
    fn submission_terminal_state() {
        assert!(SubmissionState::Submitted.allowed_next_states().is_empty());
        let err = SubmissionState::Submitted
            .transition(SubmissionState::Editing)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state transition: submission from submitted to editing"
        );
    }

    #[test]
    fn editing_cannot_loop_to_itself() {
        assert!(!SubmissionState::Editing.can_transition_to(SubmissionState::Editing));
    }
}

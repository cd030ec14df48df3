//! Event and constraint records understood by the world engine.
//!
//! Both serialize as `{"type": "<tag>", "params": {...}}`. Events are replayed
//! in array order; constraints are checked before the interaction is allowed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::context::AttributeValue;
use crate::enums::{CmpType, ConstraintType, EventType, TargetTag};

// ---------------------------------------------------------------------------
// Event params
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BroadcastParams {
    /// What the acting character sees.
    pub self_view: String,
    /// What everyone else in the room sees.
    pub room_view: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RemoveObjectParams {
    pub name: String,
}

/// Name and description of a newly created entity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntitySpec {
    pub name: String,
    pub desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateEntityParams {
    /// Where the entity appears.
    #[serde(rename = "type")]
    pub location: TargetTag,
    pub object: EntitySpec,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModifyAttributeParams {
    /// Which object is modified.
    #[serde(rename = "type")]
    pub target: TargetTag,
    pub key: String,
    pub value: AttributeValue,
}

/// A world-state change caused by the interaction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
pub enum Event {
    BroadcastMessage(BroadcastParams),
    RemoveObject(RemoveObjectParams),
    CreateEntity(CreateEntityParams),
    ModifyAttribute(ModifyAttributeParams),
}

impl Event {
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::BroadcastMessage(_) => EventType::BroadcastMessage,
            Self::RemoveObject(_) => EventType::RemoveObject,
            Self::CreateEntity(_) => EventType::CreateEntity,
            Self::ModifyAttribute(_) => EventType::ModifyAttribute,
        }
    }

    #[must_use]
    pub fn modify(target: TargetTag, key: impl Into<String>, value: AttributeValue) -> Self {
        Self::ModifyAttribute(ModifyAttributeParams {
            target,
            key: key.into(),
            value,
        })
    }
}

// ---------------------------------------------------------------------------
// Constraint params
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttributeCompareParams {
    #[serde(rename = "type")]
    pub target: TargetTag,
    pub key: String,
    pub list: Vec<AttributeValue>,
    pub cmp_type: CmpType,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IsHoldingParams {
    /// The object that must be in the actor's hands.
    pub complement: TargetTag,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InRoomParams {
    pub room_name: String,
}

/// A precondition for the interaction to be valid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
pub enum Constraint {
    AttributeCompareValue(AttributeCompareParams),
    IsHolding(IsHoldingParams),
    InRoom(InRoomParams),
}

impl Constraint {
    #[must_use]
    pub const fn constraint_type(&self) -> ConstraintType {
        match self {
            Self::AttributeCompareValue(_) => ConstraintType::AttributeCompareValue,
            Self::IsHolding(_) => ConstraintType::IsHolding,
            Self::InRoom(_) => ConstraintType::InRoom,
        }
    }

    /// An equality check against a single value.
    #[must_use]
    pub fn attribute_equals(target: TargetTag, key: impl Into<String>, value: AttributeValue) -> Self {
        Self::AttributeCompareValue(AttributeCompareParams {
            target,
            key: key.into(),
            list: vec![value],
            cmp_type: CmpType::Eq,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn events_are_adjacently_tagged() {
        let event = Event::CreateEntity(CreateEntityParams {
            location: TargetTag::InRoom,
            object: EntitySpec {
                name: "Ash Pile".into(),
                desc: "A heap of grey ash.".into(),
            },
        });
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "type": "create_entity",
                "params": {
                    "type": "in_room",
                    "object": {"name": "Ash Pile", "desc": "A heap of grey ash."}
                }
            })
        );
    }

    #[test]
    fn attribute_equals_builds_singleton_list() {
        let constraint = Constraint::attribute_equals(TargetTag::InUsedItem, "lit", true.into());
        assert_eq!(
            serde_json::to_value(&constraint).unwrap(),
            json!({
                "type": "attribute_compare_value",
                "params": {
                    "type": "in_used_item",
                    "key": "lit",
                    "list": [true],
                    "cmp_type": "eq"
                }
            })
        );
    }

    #[test]
    fn type_accessors_match_serialized_tag() {
        let events = [
            Event::BroadcastMessage(BroadcastParams {
                self_view: "a".into(),
                room_view: "b".into(),
            }),
            Event::RemoveObject(RemoveObjectParams { name: "c".into() }),
            Event::modify(TargetTag::InUsedItem, "desc", "d".into()),
        ];
        for event in &events {
            let json = serde_json::to_value(event).unwrap();
            assert_eq!(json["type"], event.event_type().as_str());
        }

        let constraints = [
            Constraint::IsHolding(IsHoldingParams {
                complement: TargetTag::InUsedTargetItem,
            }),
            Constraint::InRoom(InRoomParams {
                room_name: "crypt".into(),
            }),
        ];
        for constraint in &constraints {
            let json = serde_json::to_value(constraint).unwrap();
            assert_eq!(json["type"], constraint.constraint_type().as_str());
        }
    }
}

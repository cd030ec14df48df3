//! Object-interaction narration task.
//!
//! Users rewrite a first-person narration for the room and describe what the
//! interaction does to the world. The payload is the event/constraint list the
//! world engine replays.

use tale_core::answers::{AttributeChange, InteractionAnswers};
use tale_core::context::TaskContext;
use tale_core::enums::{ObjectRole, TargetTag, TaskKind};
use tale_core::events::{
    BroadcastParams, Constraint, CreateEntityParams, EntitySpec, Event, InRoomParams,
    IsHoldingParams, RemoveObjectParams,
};
use tale_core::submission::{InteractionSubmission, TimesRemaining};
use tale_schema::names;

use crate::copy;
use crate::rules::{Rule, is_answered, is_blank, is_changed, is_rewritten, required_if_yes};
use crate::store::{remove_row, toggle};
use crate::variant::{TaskVariant, Validated};

/// Marker type for the interaction task.
#[derive(Debug, Clone, Copy)]
pub struct Interaction;

/// Widget-level changes to [`InteractionAnswers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionUpdate {
    BroadcastMessage(String),
    RemovingObjects(bool),
    ToggleRemovedObject(String),
    CreatingEntity(bool),
    CreatedEntityName(String),
    CreatedEntityDesc(String),
    CreatedEntityLocation(TargetTag),
    ChangingDescription(bool),
    Description(ObjectRole, String),
    ChangingLocation(bool),
    Destination(ObjectRole, Option<TargetTag>),
    AddAttributeChange(AttributeChange),
    RemoveAttributeChange(usize),
    AddAttributeConstraint(AttributeChange),
    RemoveAttributeConstraint(usize),
    SecondaryHeld(bool),
    LocationConstrained(bool),
    ConstraintLocation(String),
    Reversible(bool),
    Infinite(bool),
    TimesRemaining(Option<u32>),
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn narration_present(a: &InteractionAnswers, _: &TaskContext) -> bool {
    !is_blank(&a.broadcast_message)
}

fn narration_rewritten(a: &InteractionAnswers, ctx: &TaskContext) -> bool {
    is_changed(&a.broadcast_message, &ctx.narration)
}

fn removal_answered(a: &InteractionAnswers, _: &TaskContext) -> bool {
    is_answered(a.is_removing_objects)
}

fn removal_selected(a: &InteractionAnswers, _: &TaskContext) -> bool {
    required_if_yes(a.is_removing_objects, || !a.removed_objects.is_empty())
}

fn removal_from_options(a: &InteractionAnswers, ctx: &TaskContext) -> bool {
    required_if_yes(a.is_removing_objects, || {
        let options = ctx.removable_objects();
        a.removed_objects.iter().enumerate().all(|(index, name)| {
            options.contains(&name.as_str()) && !a.removed_objects[..index].contains(name)
        })
    })
}

fn creation_answered(a: &InteractionAnswers, _: &TaskContext) -> bool {
    is_answered(a.is_creating_entity)
}

fn created_name(a: &InteractionAnswers, _: &TaskContext) -> bool {
    required_if_yes(a.is_creating_entity, || !is_blank(&a.created_entity.name))
}

fn created_desc(a: &InteractionAnswers, _: &TaskContext) -> bool {
    required_if_yes(a.is_creating_entity, || !is_blank(&a.created_entity.desc))
}

fn created_location(a: &InteractionAnswers, _: &TaskContext) -> bool {
    required_if_yes(a.is_creating_entity, || a.created_entity.location.is_some())
}

fn description_answered(a: &InteractionAnswers, _: &TaskContext) -> bool {
    is_answered(a.is_changing_description)
}

fn primary_described(a: &InteractionAnswers, ctx: &TaskContext) -> bool {
    required_if_yes(a.is_changing_description, || {
        is_rewritten(&a.primary_description, &ctx.primary.description)
    })
}

fn secondary_described(a: &InteractionAnswers, ctx: &TaskContext) -> bool {
    required_if_yes(a.is_changing_description, || {
        is_rewritten(&a.secondary_description, &ctx.secondary.description)
    })
}

fn location_answered(a: &InteractionAnswers, _: &TaskContext) -> bool {
    is_answered(a.is_changing_location)
}

fn destination_chosen(a: &InteractionAnswers, _: &TaskContext) -> bool {
    required_if_yes(a.is_changing_location, || {
        a.primary_destination.is_some() || a.secondary_destination.is_some()
    })
}

fn attribute_changes_named(a: &InteractionAnswers, _: &TaskContext) -> bool {
    a.attribute_changes.iter().all(|change| !is_blank(&change.name))
}

fn attribute_constraints_named(a: &InteractionAnswers, _: &TaskContext) -> bool {
    a.attribute_constraints
        .iter()
        .all(|constraint| !is_blank(&constraint.name))
}

fn held_answered(a: &InteractionAnswers, _: &TaskContext) -> bool {
    is_answered(a.is_secondary_held)
}

fn room_answered(a: &InteractionAnswers, _: &TaskContext) -> bool {
    is_answered(a.is_location_constrained)
}

fn room_named(a: &InteractionAnswers, _: &TaskContext) -> bool {
    required_if_yes(a.is_location_constrained, || {
        !is_blank(&a.constraint_location)
    })
}

fn reversible_answered(a: &InteractionAnswers, _: &TaskContext) -> bool {
    is_answered(a.is_reversible)
}

fn infinite_answered(a: &InteractionAnswers, _: &TaskContext) -> bool {
    is_answered(a.is_infinite)
}

fn times_remaining_set(a: &InteractionAnswers, _: &TaskContext) -> bool {
    a.is_infinite != Some(false) || a.times_remaining.is_some_and(|times| times >= 1)
}

const RULES: &[Rule<InteractionAnswers>] = &[
    Rule {
        field: "broadcast_message",
        message: copy::NARRATION_BLANK,
        complete: narration_present,
    },
    Rule {
        field: "broadcast_message",
        message: copy::NARRATION_UNCHANGED,
        complete: narration_rewritten,
    },
    Rule {
        field: "is_removing_objects",
        message: copy::REMOVAL_UNANSWERED,
        complete: removal_answered,
    },
    Rule {
        field: "removed_objects",
        message: copy::REMOVAL_EMPTY,
        complete: removal_selected,
    },
    Rule {
        field: "removed_objects",
        message: copy::REMOVAL_UNKNOWN,
        complete: removal_from_options,
    },
    Rule {
        field: "is_creating_entity",
        message: copy::CREATION_UNANSWERED,
        complete: creation_answered,
    },
    Rule {
        field: "created_entity.name",
        message: copy::CREATION_NAME,
        complete: created_name,
    },
    Rule {
        field: "created_entity.desc",
        message: copy::CREATION_DESC,
        complete: created_desc,
    },
    Rule {
        field: "created_entity.location",
        message: copy::CREATION_LOCATION,
        complete: created_location,
    },
    Rule {
        field: "is_changing_description",
        message: copy::DESCRIPTION_UNANSWERED,
        complete: description_answered,
    },
    Rule {
        field: "primary_description",
        message: copy::PRIMARY_DESCRIPTION,
        complete: primary_described,
    },
    Rule {
        field: "secondary_description",
        message: copy::SECONDARY_DESCRIPTION,
        complete: secondary_described,
    },
    Rule {
        field: "is_changing_location",
        message: copy::LOCATION_UNANSWERED,
        complete: location_answered,
    },
    Rule {
        field: "primary_destination",
        message: copy::LOCATION_DESTINATION,
        complete: destination_chosen,
    },
    Rule {
        field: "attribute_changes",
        message: copy::ATTRIBUTE_CHANGE_NAME,
        complete: attribute_changes_named,
    },
    Rule {
        field: "attribute_constraints",
        message: copy::ATTRIBUTE_CONSTRAINT_NAME,
        complete: attribute_constraints_named,
    },
    Rule {
        field: "is_secondary_held",
        message: copy::HELD_UNANSWERED,
        complete: held_answered,
    },
    Rule {
        field: "is_location_constrained",
        message: copy::ROOM_UNANSWERED,
        complete: room_answered,
    },
    Rule {
        field: "constraint_location",
        message: copy::ROOM_BLANK,
        complete: room_named,
    },
    Rule {
        field: "is_reversible",
        message: copy::REVERSIBLE_UNANSWERED,
        complete: reversible_answered,
    },
    Rule {
        field: "is_infinite",
        message: copy::INFINITE_UNANSWERED,
        complete: infinite_answered,
    },
    Rule {
        field: "times_remaining",
        message: copy::TIMES_REMAINING,
        complete: times_remaining_set,
    },
];

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

impl TaskVariant for Interaction {
    type Answers = InteractionAnswers;
    type Update = InteractionUpdate;
    type Submission = InteractionSubmission;

    const KIND: TaskKind = TaskKind::Interaction;
    const ANSWERS_SCHEMA: &'static str = names::INTERACTION_ANSWERS;
    const SUBMISSION_SCHEMA: &'static str = names::INTERACTION_SUBMISSION;

    fn rules() -> &'static [Rule<InteractionAnswers>] {
        RULES
    }

    fn prefill(ctx: &TaskContext) -> InteractionAnswers {
        InteractionAnswers::prefilled(ctx)
    }

    fn apply(answers: &mut InteractionAnswers, update: InteractionUpdate) {
        match update {
            InteractionUpdate::BroadcastMessage(text) => answers.broadcast_message = text,
            InteractionUpdate::RemovingObjects(flag) => answers.is_removing_objects = Some(flag),
            InteractionUpdate::ToggleRemovedObject(name) => {
                toggle(&mut answers.removed_objects, name);
            }
            InteractionUpdate::CreatingEntity(flag) => answers.is_creating_entity = Some(flag),
            InteractionUpdate::CreatedEntityName(name) => answers.created_entity.name = name,
            InteractionUpdate::CreatedEntityDesc(desc) => answers.created_entity.desc = desc,
            InteractionUpdate::CreatedEntityLocation(tag) => {
                answers.created_entity.location = Some(tag);
            }
            InteractionUpdate::ChangingDescription(flag) => {
                answers.is_changing_description = Some(flag);
            }
            InteractionUpdate::Description(ObjectRole::Primary, text) => {
                answers.primary_description = text;
            }
            InteractionUpdate::Description(ObjectRole::Secondary, text) => {
                answers.secondary_description = text;
            }
            InteractionUpdate::ChangingLocation(flag) => answers.is_changing_location = Some(flag),
            InteractionUpdate::Destination(ObjectRole::Primary, tag) => {
                answers.primary_destination = tag;
            }
            InteractionUpdate::Destination(ObjectRole::Secondary, tag) => {
                answers.secondary_destination = tag;
            }
            InteractionUpdate::AddAttributeChange(change) => answers.attribute_changes.push(change),
            InteractionUpdate::RemoveAttributeChange(index) => {
                remove_row(&mut answers.attribute_changes, index);
            }
            InteractionUpdate::AddAttributeConstraint(change) => {
                answers.attribute_constraints.push(change);
            }
            InteractionUpdate::RemoveAttributeConstraint(index) => {
                remove_row(&mut answers.attribute_constraints, index);
            }
            InteractionUpdate::SecondaryHeld(flag) => answers.is_secondary_held = Some(flag),
            InteractionUpdate::LocationConstrained(flag) => {
                answers.is_location_constrained = Some(flag);
            }
            InteractionUpdate::ConstraintLocation(room) => answers.constraint_location = room,
            InteractionUpdate::Reversible(flag) => answers.is_reversible = Some(flag),
            InteractionUpdate::Infinite(flag) => answers.is_infinite = Some(flag),
            InteractionUpdate::TimesRemaining(times) => answers.times_remaining = times,
        }
    }

    fn assemble(input: &Validated<'_, Self>) -> InteractionSubmission {
        let answers = input.answers();
        let ctx = input.context();

        InteractionSubmission {
            events: events(answers, ctx),
            constraints: constraints(answers),
            times_remaining: if answers.is_infinite == Some(true) {
                Some(TimesRemaining::INFINITE)
            } else {
                answers.times_remaining.map(TimesRemaining::Count)
            },
            reversible: answers.is_reversible,
        }
    }
}

/// Events in replay order: broadcast first, then removals, creation,
/// description, location, and attribute changes.
fn events(answers: &InteractionAnswers, ctx: &TaskContext) -> Vec<Event> {
    let mut events = vec![Event::BroadcastMessage(BroadcastParams {
        self_view: ctx.narration.clone(),
        room_view: answers.broadcast_message.trim().to_string(),
    })];

    if answers.is_removing_objects == Some(true) {
        events.extend(answers.removed_objects.iter().map(|name| {
            Event::RemoveObject(RemoveObjectParams { name: name.clone() })
        }));
    }

    if answers.is_creating_entity == Some(true)
        && let Some(location) = answers.created_entity.location
    {
        events.push(Event::CreateEntity(CreateEntityParams {
            location,
            object: EntitySpec {
                name: answers.created_entity.name.trim().to_string(),
                desc: answers.created_entity.desc.trim().to_string(),
            },
        }));
    }

    if answers.is_changing_description == Some(true) {
        for role in [ObjectRole::Primary, ObjectRole::Secondary] {
            events.push(Event::modify(
                role.target_tag(),
                "desc",
                answers.description(role).trim().into(),
            ));
        }
    }

    if answers.is_changing_location == Some(true) {
        for role in [ObjectRole::Primary, ObjectRole::Secondary] {
            if let Some(destination) = answers.destination(role) {
                events.push(Event::modify(
                    role.target_tag(),
                    "location",
                    destination.as_str().into(),
                ));
            }
        }
    }

    events.extend(answers.attribute_changes.iter().map(|change| {
        Event::modify(
            change.target.target_tag(),
            change.name.trim(),
            change.value.clone(),
        )
    }));

    events
}

fn constraints(answers: &InteractionAnswers) -> Vec<Constraint> {
    let mut constraints: Vec<Constraint> = answers
        .attribute_constraints
        .iter()
        .map(|constraint| {
            Constraint::attribute_equals(
                constraint.target.target_tag(),
                constraint.name.trim(),
                constraint.value.clone(),
            )
        })
        .collect();

    if answers.is_secondary_held == Some(true) {
        constraints.push(Constraint::IsHolding(IsHoldingParams {
            complement: ObjectRole::Secondary.target_tag(),
        }));
    }

    if answers.is_location_constrained == Some(true) {
        constraints.push(Constraint::InRoom(InRoomParams {
            room_name: answers.constraint_location.trim().to_string(),
        }));
    }

    constraints
}

//! Object/character description task.
//!
//! Each object's description starts as its current text and must be rewritten;
//! users can also attach free-form tags. Answers are keyed by object name, so
//! two objects with the same name are described together.

use tale_core::answers::DescriptionAnswers;
use tale_core::context::TaskContext;
use tale_core::enums::TaskKind;
use tale_core::submission::{DescribedObject, DescriptionSubmission};
use tale_schema::names;

use crate::copy;
use crate::rules::{Rule, is_blank, is_changed};
use crate::variant::{TaskVariant, Validated};

#[derive(Debug, Clone, Copy)]
pub struct Description;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionUpdate {
    Description { object: String, text: String },
    AddTag { object: String, tag: String },
    RemoveTag { object: String, tag: String },
}

fn every_object_described(a: &DescriptionAnswers, ctx: &TaskContext) -> bool {
    ctx.objects()
        .iter()
        .all(|object| a.description_for(&object.name).is_some_and(|text| !is_blank(text)))
}

fn every_description_changed(a: &DescriptionAnswers, ctx: &TaskContext) -> bool {
    ctx.objects().iter().all(|object| {
        a.description_for(&object.name)
            .is_none_or(|text| is_changed(text, &object.description))
    })
}

fn no_blank_tags(a: &DescriptionAnswers, _: &TaskContext) -> bool {
    a.tags.values().flatten().all(|tag| !is_blank(tag))
}

const RULES: &[Rule<DescriptionAnswers>] = &[
    Rule {
        field: "descriptions",
        message: copy::DESCRIPTIONS_MISSING,
        complete: every_object_described,
    },
    Rule {
        field: "descriptions",
        message: copy::DESCRIPTIONS_UNCHANGED,
        complete: every_description_changed,
    },
    Rule {
        field: "tags",
        message: copy::TAG_BLANK,
        complete: no_blank_tags,
    },
];

impl TaskVariant for Description {
    type Answers = DescriptionAnswers;
    type Update = DescriptionUpdate;
    type Submission = DescriptionSubmission;

    const KIND: TaskKind = TaskKind::Description;
    const ANSWERS_SCHEMA: &'static str = names::DESCRIPTION_ANSWERS;
    const SUBMISSION_SCHEMA: &'static str = names::DESCRIPTION_SUBMISSION;

    fn rules() -> &'static [Rule<DescriptionAnswers>] {
        RULES
    }

    fn prefill(ctx: &TaskContext) -> DescriptionAnswers {
        DescriptionAnswers::prefilled(ctx)
    }

    fn apply(answers: &mut DescriptionAnswers, update: DescriptionUpdate) {
        match update {
            DescriptionUpdate::Description { object, text } => {
                answers.descriptions.insert(object, text);
            }
            DescriptionUpdate::AddTag { object, tag } => {
                let tags = answers.tags.entry(object).or_default();
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
            DescriptionUpdate::RemoveTag { object, tag } => {
                if let Some(tags) = answers.tags.get_mut(&object) {
                    tags.retain(|existing| *existing != tag);
                }
            }
        }
    }

    fn assemble(input: &Validated<'_, Self>) -> DescriptionSubmission {
        let answers = input.answers();
        let objects = input
            .context()
            .objects()
            .into_iter()
            .map(|object| {
                let mut tags: Vec<String> = Vec::new();
                for tag in answers.tags_for(&object.name) {
                    let tag = tag.trim().to_string();
                    if !tags.contains(&tag) {
                        tags.push(tag);
                    }
                }
                DescribedObject {
                    name: object.name.clone(),
                    before: object.description.clone(),
                    after: answers
                        .description_for(&object.name)
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                    tags,
                }
            })
            .collect();
        DescriptionSubmission { objects }
    }
}

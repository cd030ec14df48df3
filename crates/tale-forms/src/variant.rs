//! The seam every task variant plugs into.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tale_core::context::TaskContext;
use tale_core::enums::TaskKind;

use crate::rules::{self, ErrorList, Rule};

/// A crowdsourcing task variant: its answer set, rule table, widget updates,
/// and payload shape.
pub trait TaskVariant: Sized {
    type Answers: 'static
        + Clone
        + Default
        + fmt::Debug
        + PartialEq
        + Serialize
        + DeserializeOwned;
    /// One widget-level change to the answer set.
    type Update: fmt::Debug;
    type Submission: Clone + fmt::Debug + PartialEq + Serialize;

    const KIND: TaskKind;
    /// Registry name of the answer-set schema.
    const ANSWERS_SCHEMA: &'static str;
    /// Registry name of the submission schema.
    const SUBMISSION_SCHEMA: &'static str;

    /// Completeness rules, in the order their messages are reported.
    fn rules() -> &'static [Rule<Self::Answers>];

    /// The answer set as the task view shows it on mount.
    fn prefill(ctx: &TaskContext) -> Self::Answers;

    fn apply(answers: &mut Self::Answers, update: Self::Update);

    /// Build the payload. Only reachable through [`check`].
    fn assemble(input: &Validated<'_, Self>) -> Self::Submission;
}

/// Proof that an answer set passed its variant's rule table.
///
/// The payload assembler only accepts this type, so a payload can never be
/// built from incomplete answers.
pub struct Validated<'a, V: TaskVariant> {
    answers: &'a V::Answers,
    context: &'a TaskContext,
    _variant: PhantomData<fn() -> V>,
}

impl<'a, V: TaskVariant> Validated<'a, V> {
    #[must_use]
    pub const fn answers(&self) -> &'a V::Answers {
        self.answers
    }

    #[must_use]
    pub const fn context(&self) -> &'a TaskContext {
        self.context
    }
}

impl<V: TaskVariant> fmt::Debug for Validated<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validated")
            .field("kind", &V::KIND)
            .field("answers", self.answers)
            .finish_non_exhaustive()
    }
}

/// Every incomplete field of `answers`, in rule-table order. Never fails.
#[must_use]
pub fn validate_answers<V: TaskVariant>(answers: &V::Answers, ctx: &TaskContext) -> ErrorList {
    rules::validate(V::rules(), answers, ctx)
}

/// Validate and, when complete, hand back a token the assembler accepts.
///
/// # Errors
///
/// Returns the non-empty [`ErrorList`] when any rule fails.
pub fn check<'a, V: TaskVariant>(
    answers: &'a V::Answers,
    ctx: &'a TaskContext,
) -> Result<Validated<'a, V>, ErrorList> {
    let errors = validate_answers::<V>(answers, ctx);
    if errors.is_empty() {
        Ok(Validated {
            answers,
            context: ctx,
            _variant: PhantomData,
        })
    } else {
        tracing::debug!(task = %V::KIND, errors = errors.len(), "answer set incomplete");
        Err(errors)
    }
}

/// Build the submission payload for validated answers.
#[must_use]
pub fn assemble<V: TaskVariant>(input: &Validated<'_, V>) -> V::Submission {
    let submission = V::assemble(input);
    tracing::debug!(task = %V::KIND, "payload assembled");
    submission
}

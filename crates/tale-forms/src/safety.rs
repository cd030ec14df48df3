//! Safety/context labelling task.

use tale_core::answers::SafetyAnswers;
use tale_core::context::TaskContext;
use tale_core::enums::{SafetyCategory, SafetyLabel, TaskKind};
use tale_core::submission::SafetySubmission;
use tale_schema::names;

use crate::copy;
use crate::rules::{Rule, is_answered, is_blank, required_if_yes};
use crate::store::toggle;
use crate::variant::{TaskVariant, Validated};

#[derive(Debug, Clone, Copy)]
pub struct Safety;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafetyUpdate {
    Safe(bool),
    ToggleCategory(SafetyCategory),
    ContextDependent(bool),
    Rationale(String),
}

/// The follow-up questions are only asked once the narration is marked unsafe.
const fn is_unsafe(a: &SafetyAnswers) -> Option<bool> {
    match a.is_safe {
        Some(safe) => Some(!safe),
        None => None,
    }
}

fn safe_answered(a: &SafetyAnswers, _: &TaskContext) -> bool {
    is_answered(a.is_safe)
}

fn categories_chosen(a: &SafetyAnswers, _: &TaskContext) -> bool {
    required_if_yes(is_unsafe(a), || !a.unsafe_categories.is_empty())
}

fn context_answered(a: &SafetyAnswers, _: &TaskContext) -> bool {
    required_if_yes(is_unsafe(a), || is_answered(a.is_context_dependent))
}

fn rationale_given(a: &SafetyAnswers, _: &TaskContext) -> bool {
    required_if_yes(is_unsafe(a), || {
        required_if_yes(a.is_context_dependent, || !is_blank(&a.rationale))
    })
}

const RULES: &[Rule<SafetyAnswers>] = &[
    Rule {
        field: "is_safe",
        message: copy::SAFE_UNANSWERED,
        complete: safe_answered,
    },
    Rule {
        field: "unsafe_categories",
        message: copy::CATEGORIES_EMPTY,
        complete: categories_chosen,
    },
    Rule {
        field: "is_context_dependent",
        message: copy::CONTEXT_UNANSWERED,
        complete: context_answered,
    },
    Rule {
        field: "rationale",
        message: copy::RATIONALE_BLANK,
        complete: rationale_given,
    },
];

impl TaskVariant for Safety {
    type Answers = SafetyAnswers;
    type Update = SafetyUpdate;
    type Submission = SafetySubmission;

    const KIND: TaskKind = TaskKind::Safety;
    const ANSWERS_SCHEMA: &'static str = names::SAFETY_ANSWERS;
    const SUBMISSION_SCHEMA: &'static str = names::SAFETY_SUBMISSION;

    fn rules() -> &'static [Rule<SafetyAnswers>] {
        RULES
    }

    fn prefill(_ctx: &TaskContext) -> SafetyAnswers {
        SafetyAnswers::default()
    }

    fn apply(answers: &mut SafetyAnswers, update: SafetyUpdate) {
        match update {
            SafetyUpdate::Safe(flag) => answers.is_safe = Some(flag),
            SafetyUpdate::ToggleCategory(category) => {
                toggle(&mut answers.unsafe_categories, category);
            }
            SafetyUpdate::ContextDependent(flag) => answers.is_context_dependent = Some(flag),
            SafetyUpdate::Rationale(text) => answers.rationale = text,
        }
    }

    fn assemble(input: &Validated<'_, Self>) -> SafetySubmission {
        let answers = input.answers();
        if answers.is_safe == Some(true) {
            return SafetySubmission {
                label: SafetyLabel::Safe,
                categories: Vec::new(),
                context_dependent: false,
                rationale: None,
            };
        }

        let context_dependent = answers.is_context_dependent == Some(true);
        SafetySubmission {
            label: SafetyLabel::Unsafe,
            categories: answers.unsafe_categories.clone(),
            context_dependent,
            rationale: context_dependent.then(|| answers.rationale.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{check, validate_answers};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn answers(updates: Vec<SafetyUpdate>) -> SafetyAnswers {
        let mut answers = SafetyAnswers::default();
        for update in updates {
            Safety::apply(&mut answers, update);
        }
        answers
    }

    #[rstest]
    #[case::unanswered(vec![], vec![copy::SAFE_UNANSWERED])]
    #[case::safe(vec![SafetyUpdate::Safe(true)], vec![])]
    #[case::unsafe_bare(
        vec![SafetyUpdate::Safe(false)],
        vec![copy::CATEGORIES_EMPTY, copy::CONTEXT_UNANSWERED]
    )]
    #[case::context_without_rationale(
        vec![
            SafetyUpdate::Safe(false),
            SafetyUpdate::ToggleCategory(SafetyCategory::Violence),
            SafetyUpdate::ContextDependent(true),
        ],
        vec![copy::RATIONALE_BLANK]
    )]
    #[case::not_context_dependent(
        vec![
            SafetyUpdate::Safe(false),
            SafetyUpdate::ToggleCategory(SafetyCategory::Hate),
            SafetyUpdate::ContextDependent(false),
        ],
        vec![]
    )]
    fn rule_table_outcomes(#[case] updates: Vec<SafetyUpdate>, #[case] expected: Vec<&str>) {
        let errors = validate_answers::<Safety>(&answers(updates), &TaskContext::default());
        assert_eq!(errors.messages(), expected);
    }

    #[test]
    fn safe_label_drops_stale_sub_answers() {
        let answers = answers(vec![
            SafetyUpdate::Safe(false),
            SafetyUpdate::ToggleCategory(SafetyCategory::Profanity),
            SafetyUpdate::Safe(true),
        ]);
        let ctx = TaskContext::default();
        let validated = check::<Safety>(&answers, &ctx).expect("complete");
        let submission = Safety::assemble(&validated);
        assert_eq!(submission.label, SafetyLabel::Safe);
        assert!(submission.categories.is_empty());
    }

    #[test]
    fn unsafe_in_context_keeps_rationale() {
        let answers = answers(vec![
            SafetyUpdate::Safe(false),
            SafetyUpdate::ToggleCategory(SafetyCategory::Violence),
            SafetyUpdate::ContextDependent(true),
            SafetyUpdate::Rationale("  Fine during a duel. ".into()),
        ]);
        let ctx = TaskContext::default();
        let validated = check::<Safety>(&answers, &ctx).expect("complete");
        let submission = Safety::assemble(&validated);
        assert_eq!(
            submission,
            SafetySubmission {
                label: SafetyLabel::Unsafe,
                categories: vec![SafetyCategory::Violence],
                context_dependent: true,
                rationale: Some("Fine during a duel.".into()),
            }
        );
    }
}

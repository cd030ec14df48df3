//! Submission controller lifecycle: gating, rejection, transport failure,
//! retry, and the re-submit guard.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tale_core::answers::DescriptionAnswers;
use tale_core::enums::{SafetyCategory, SubmissionState, TaskKind};
use tale_core::lifecycle::{Availability, TaskEnvelope};
use tale_forms::copy;
use tale_forms::{
    Description, DescriptionUpdate, Interaction, InteractionUpdate, Safety, SafetyUpdate,
    SubmissionController, SubmissionError, SubmitOptions, SubmitOutcome, TransportError,
};

fn envelope(lifecycle: Value) -> TaskEnvelope {
    let mut raw = json!({
        "initialTaskData": {
            "primary": {"name": "lantern", "description": "A brass lantern."},
            "secondary": {"name": "wick", "description": "A frayed wick."},
            "narration": "You trim the wick of the lantern.",
            "room_name": "cellar"
        }
    });
    if let (Some(target), Some(flags)) = (raw.as_object_mut(), lifecycle.as_object()) {
        target.extend(flags.clone());
    }
    serde_json::from_value(raw).unwrap()
}

fn ready_envelope() -> TaskEnvelope {
    envelope(json!({}))
}

#[derive(Default)]
struct RecordingSink {
    failures_left: usize,
    delivered: Vec<(TaskKind, Value)>,
}

impl tale_forms::SubmitSink for RecordingSink {
    fn submit(&mut self, kind: TaskKind, payload: &Value) -> Result<(), TransportError> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(TransportError::new("connection reset"));
        }
        self.delivered.push((kind, payload.clone()));
        Ok(())
    }
}

fn safe_controller() -> SubmissionController<Safety> {
    let mut controller = SubmissionController::new(ready_envelope(), SubmitOptions::default());
    controller.update(SafetyUpdate::Safe(true)).unwrap();
    controller
}

#[rstest]
#[case::blocked(
    json!({"blockedReason": "no_mobile", "blockedExplanation": "Desktop only.", "isPreview": true}),
    Availability::Blocked { reason: "no_mobile".into(), explanation: Some("Desktop only.".into()) }
)]
#[case::loading(json!({"isLoading": true, "isPreview": true}), Availability::Loading)]
#[case::preview(json!({"isPreview": true}), Availability::Preview)]
fn unavailable_tasks_refuse_submission(#[case] flags: Value, #[case] expected: Availability) {
    let mut controller =
        SubmissionController::<Safety>::new(envelope(flags), SubmitOptions::default());
    controller.update(SafetyUpdate::Safe(true)).unwrap();
    let mut sink = RecordingSink::default();

    match controller.submit(&mut sink) {
        Err(SubmissionError::Unavailable(availability)) => assert_eq!(availability, expected),
        other => panic!("expected Unavailable, got {other:?}"),
    }
    assert!(sink.delivered.is_empty());
    assert_eq!(controller.state(), SubmissionState::Editing);
}

#[test]
fn rejected_submit_keeps_form_editable() {
    let mut controller =
        SubmissionController::<Interaction>::new(ready_envelope(), SubmitOptions::default());
    controller
        .update(InteractionUpdate::BroadcastMessage(String::new()))
        .unwrap();
    let mut sink = RecordingSink::default();

    let outcome = controller.submit(&mut sink).unwrap();
    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(errors.messages()[0], copy::NARRATION_BLANK);
    assert_eq!(controller.errors(), &errors);
    assert_eq!(controller.state(), SubmissionState::Editing);
    assert!(sink.delivered.is_empty());

    controller
        .update(InteractionUpdate::BroadcastMessage("The actor trims the wick.".into()))
        .unwrap();
    assert_eq!(
        controller.answers().broadcast_message,
        "The actor trims the wick."
    );
}

#[test]
fn transport_failure_allows_retry() {
    let mut controller = safe_controller();
    let mut sink = RecordingSink {
        failures_left: 1,
        ..RecordingSink::default()
    };

    let err = controller.submit(&mut sink).unwrap_err();
    assert!(matches!(err, SubmissionError::Transport(_)));
    assert_eq!(
        err.to_string(),
        "submission transport failed: connection reset"
    );
    assert_eq!(controller.state(), SubmissionState::Editing);

    let outcome = controller.submit(&mut sink).unwrap();
    assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
    assert_eq!(controller.state(), SubmissionState::Submitted);
    assert_eq!(
        sink.delivered,
        vec![(
            TaskKind::Safety,
            json!({"label": "safe", "categories": [], "context_dependent": false})
        )]
    );
}

#[test]
fn submitted_form_is_terminal() {
    let mut controller = safe_controller();
    let mut sink = RecordingSink::default();
    controller.submit(&mut sink).unwrap();

    assert!(matches!(
        controller.submit(&mut sink),
        Err(SubmissionError::AlreadySubmitted)
    ));
    assert!(matches!(
        controller.update(SafetyUpdate::ToggleCategory(SafetyCategory::Other)),
        Err(SubmissionError::AlreadySubmitted)
    ));
    assert_eq!(sink.delivered.len(), 1);
}

#[test]
fn description_session_submits_rewritten_objects() {
    let mut controller =
        SubmissionController::<Description>::new(ready_envelope(), SubmitOptions::default());
    for (object, text) in [
        ("lantern", "A brass lantern with a soot-stained chimney."),
        ("wick", "A neatly trimmed wick."),
    ] {
        controller
            .update(DescriptionUpdate::Description {
                object: object.into(),
                text: text.into(),
            })
            .unwrap();
    }
    controller
        .update(DescriptionUpdate::AddTag {
            object: "lantern".into(),
            tag: "light source".into(),
        })
        .unwrap();

    let mut sink = RecordingSink::default();
    let SubmitOutcome::Submitted(submission) = controller.submit(&mut sink).unwrap() else {
        panic!("expected submission");
    };
    assert_eq!(submission.objects.len(), 2);
    assert_eq!(submission.objects[0].before, "A brass lantern.");
    assert_eq!(submission.objects[0].tags, vec!["light source".to_string()]);
    assert_eq!(sink.delivered[0].0, TaskKind::Description);
}

#[test]
fn schema_verification_can_be_disabled() {
    let answers = DescriptionAnswers {
        descriptions: [
            ("lantern".to_string(), "A dented lantern.".to_string()),
            ("wick".to_string(), "A charred wick.".to_string()),
        ]
        .into_iter()
        .collect(),
        ..DescriptionAnswers::default()
    };
    let mut controller = SubmissionController::<Description>::with_answers(
        ready_envelope(),
        answers,
        SubmitOptions {
            verify_payload_schema: false,
        },
    );
    let mut sink = RecordingSink::default();
    assert!(matches!(
        controller.submit(&mut sink).unwrap(),
        SubmitOutcome::Submitted(_)
    ));
}

#[test]
fn closure_sinks_are_accepted() {
    let mut controller = safe_controller();
    let mut seen = 0;
    let mut sink = |kind: TaskKind, _: &Value| -> Result<(), TransportError> {
        assert_eq!(kind, TaskKind::Safety);
        seen += 1;
        Ok(())
    };
    controller.submit(&mut sink).unwrap();
    assert_eq!(seen, 1);
}

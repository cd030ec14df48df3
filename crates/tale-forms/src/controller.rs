//! Submission controller: the `editing → submitted` state machine that ties
//! the answer set, the validator, the assembler, and the submit sink together.

use tale_core::context::TaskContext;
use tale_core::enums::SubmissionState;
use tale_core::errors::CoreError;
use tale_core::lifecycle::{Availability, TaskEnvelope};
use tale_schema::{SchemaError, SchemaRegistry};

use crate::rules::ErrorList;
use crate::sink::{SubmitSink, TransportError};
use crate::variant::{TaskVariant, assemble, check};

/// Errors that stop a submit attempt before the form is submitted.
///
/// An incomplete answer set is not one of them; see [`SubmitOutcome::Rejected`].
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("task has already been submitted")]
    AlreadySubmitted,

    #[error("task cannot be submitted: {0}")]
    Unavailable(Availability),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("assembled payload does not match its schema: {0}")]
    PayloadSchema(#[from] SchemaError),

    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    State(#[from] CoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOptions {
    /// Check each assembled payload against its registry schema before sending.
    pub verify_payload_schema: bool,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            verify_payload_schema: true,
        }
    }
}

/// Result of a submit attempt that reached the validator.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<S> {
    /// The answer set is incomplete; the form stays editable.
    Rejected(ErrorList),
    /// The payload was handed to the sink.
    Submitted(S),
}

/// Owns one task session: the envelope, the answer set, and where the form is
/// in its lifecycle.
pub struct SubmissionController<V: TaskVariant> {
    envelope: TaskEnvelope,
    answers: V::Answers,
    state: SubmissionState,
    errors: ErrorList,
    registry: Option<SchemaRegistry>,
}

impl<V: TaskVariant> SubmissionController<V> {
    /// Start a session with the variant's pre-filled answers.
    #[must_use]
    pub fn new(envelope: TaskEnvelope, options: SubmitOptions) -> Self {
        let answers = V::prefill(envelope.context());
        Self::with_answers(envelope, answers, options)
    }

    #[must_use]
    pub fn with_answers(
        envelope: TaskEnvelope,
        answers: V::Answers,
        options: SubmitOptions,
    ) -> Self {
        Self {
            envelope,
            answers,
            state: SubmissionState::Editing,
            errors: ErrorList::default(),
            registry: options.verify_payload_schema.then(SchemaRegistry::new),
        }
    }

    #[must_use]
    pub const fn context(&self) -> &TaskContext {
        self.envelope.context()
    }

    #[must_use]
    pub const fn answers(&self) -> &V::Answers {
        &self.answers
    }

    /// Errors from the last rejected submit. Cleared by a successful one.
    #[must_use]
    pub const fn errors(&self) -> &ErrorList {
        &self.errors
    }

    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Apply one widget change to the answer set.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::AlreadySubmitted` once the form is submitted.
    pub fn update(&mut self, update: V::Update) -> Result<(), SubmissionError> {
        if self.state == SubmissionState::Submitted {
            return Err(SubmissionError::AlreadySubmitted);
        }
        V::apply(&mut self.answers, update);
        Ok(())
    }

    /// Validate, assemble, and hand the payload to `sink`.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError` when the form was already submitted, the task
    /// is not ready, the payload fails its schema, or the sink fails. A sink
    /// failure leaves the form in `editing` so the user can retry.
    pub fn submit(
        &mut self,
        sink: &mut dyn SubmitSink,
    ) -> Result<SubmitOutcome<V::Submission>, SubmissionError> {
        if self.state == SubmissionState::Submitted {
            return Err(SubmissionError::AlreadySubmitted);
        }
        let availability = self.envelope.availability();
        if !availability.is_ready() {
            tracing::debug!(task = %V::KIND, %availability, "submit refused");
            return Err(SubmissionError::Unavailable(availability));
        }

        let submission = match check::<V>(&self.answers, self.envelope.context()) {
            Ok(validated) => assemble(&validated),
            Err(errors) => {
                self.errors = errors.clone();
                return Ok(SubmitOutcome::Rejected(errors));
            }
        };
        self.errors = ErrorList::default();

        let payload = serde_json::to_value(&submission)?;
        if let Some(registry) = &self.registry {
            registry.validate(V::SUBMISSION_SCHEMA, &payload)?;
        }

        if let Err(error) = sink.submit(V::KIND, &payload) {
            tracing::warn!(task = %V::KIND, %error, "submission transport failed");
            return Err(error.into());
        }

        self.state = self.state.transition(SubmissionState::Submitted)?;
        tracing::info!(task = %V::KIND, state = %self.state, "task submitted");
        Ok(SubmitOutcome::Submitted(submission))
    }
}

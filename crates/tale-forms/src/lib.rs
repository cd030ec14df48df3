//! # tale-forms
//!
//! The submission pipeline shared by every Tale task variant:
//!
//! - **Form state**: each variant owns one typed answer set (from `tale-core`)
//!   and an `Update` enum that widgets send to change one field at a time.
//! - **Validator**: a declarative table of `{field, message, predicate}` rules per
//!   variant, evaluated in table order into an [`ErrorList`].
//! - **Payload assembler**: a pure transform from a [`Validated`] answer set to the
//!   variant's submission payload.
//! - **Submission controller**: runs the validator, assembles, checks the payload
//!   schema, and hands the JSON to a [`SubmitSink`].

pub mod controller;
pub mod copy;
pub mod description;
pub mod interaction;
pub mod rules;
pub mod safety;
pub mod sink;
mod store;
pub mod variant;

pub use controller::{SubmissionController, SubmissionError, SubmitOptions, SubmitOutcome};
pub use description::{Description, DescriptionUpdate};
pub use interaction::{Interaction, InteractionUpdate};
pub use rules::{ErrorList, FieldError, Rule};
pub use safety::{Safety, SafetyUpdate};
pub use sink::{SubmitSink, TransportError};
pub use variant::{TaskVariant, Validated, assemble, check, validate_answers};

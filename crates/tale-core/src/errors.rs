//! Cross-cutting error types for Tale.
//!
//! Incomplete answers are not errors here: the validator in `tale-forms`
//! reports them as data. This module only covers misuse of the core types.

use thiserror::Error;

/// Errors that can be raised by the core types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity} from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    /// A task kind name did not match any known task variant.
    #[error("Unknown task kind: {0}")]
    UnknownTaskKind(String),
}

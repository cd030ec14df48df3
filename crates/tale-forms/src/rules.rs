//! Declarative validation rules and the error list they produce.
//!
//! A rule pairs a field name and a message with a completeness predicate.
//! Rules are evaluated in table order, so the same answers always yield the
//! same messages in the same order.

use std::fmt;

use serde::Serialize;
use tale_core::context::TaskContext;

/// One completeness check in a variant's rule table.
pub struct Rule<A> {
    /// Answer-set field the rule is about.
    pub field: &'static str,
    /// Message shown when the field is incomplete.
    pub message: &'static str,
    /// Returns `true` when the field counts as answered.
    pub complete: fn(&A, &TaskContext) -> bool,
}

/// An incomplete required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Ordered validation result. Empty means ready to submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorList(Vec<FieldError>);

impl ErrorList {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<&'static str> {
        self.0.iter().map(|error| error.message).collect()
    }

    #[must_use]
    pub fn contains(&self, message: &str) -> bool {
        self.0.iter().any(|error| error.message == message)
    }

    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|error| error.field).collect()
    }
}

impl FromIterator<FieldError> for ErrorList {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(error.message)?;
        }
        Ok(())
    }
}

/// Run every rule against `answers`, collecting failures in table order.
#[must_use]
pub fn validate<A>(rules: &[Rule<A>], answers: &A, ctx: &TaskContext) -> ErrorList {
    rules
        .iter()
        .filter(|rule| !(rule.complete)(answers, ctx))
        .map(|rule| FieldError {
            field: rule.field,
            message: rule.message,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Predicate helpers
// ---------------------------------------------------------------------------

/// Whitespace-only text counts as blank.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Pre-filled text only counts once it differs from its default.
#[must_use]
pub fn is_changed(text: &str, default: &str) -> bool {
    text.trim() != default.trim()
}

/// Non-blank and changed from the default.
#[must_use]
pub fn is_rewritten(text: &str, default: &str) -> bool {
    !is_blank(text) && is_changed(text, default)
}

/// A yes/no question has been clicked.
#[must_use]
pub const fn is_answered(flag: Option<bool>) -> bool {
    flag.is_some()
}

/// A sub-field only matters when its parent question was answered yes.
#[must_use]
pub fn required_if_yes(parent: Option<bool>, complete: impl FnOnce() -> bool) -> bool {
    parent != Some(true) || complete()
}

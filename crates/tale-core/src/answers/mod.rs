//! Answer sets: one typed field per question, per task variant.
//!
//! Every field starts empty or `null` (unanswered). `prefilled` constructors
//! reproduce what a task view shows on mount, where some free-text fields are
//! seeded with the current text and only count once they are changed.

mod description;
mod interaction;
mod safety;

pub use description::DescriptionAnswers;
pub use interaction::{AttributeChange, CreatedEntity, InteractionAnswers};
pub use safety::SafetyAnswers;

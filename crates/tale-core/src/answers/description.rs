use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::context::TaskContext;

/// Answers for the object/character description task.
///
/// Keyed by object name so the same answer set works however many objects
/// the context offers. Objects that share a name share one entry, so a
/// rewrite of either applies to both.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct DescriptionAnswers {
    /// Object name to rewritten description.
    pub descriptions: BTreeMap<String, String>,
    /// Object name to free-form tags, in entry order.
    pub tags: BTreeMap<String, Vec<String>>,
}

impl DescriptionAnswers {
    /// Every context object's description seeded with its current text.
    ///
    /// When both objects carry the same name the primary's text is the seed.
    #[must_use]
    pub fn prefilled(ctx: &TaskContext) -> Self {
        let mut descriptions = BTreeMap::new();
        for object in ctx.objects() {
            descriptions
                .entry(object.name.clone())
                .or_insert_with(|| object.description.clone());
        }
        Self {
            descriptions,
            tags: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn description_for(&self, name: &str) -> Option<&str> {
        self.descriptions.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn tags_for(&self, name: &str) -> &[String] {
        self.tags.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::WorldObject;
    use pretty_assertions::assert_eq;

    #[test]
    fn prefilled_seeds_each_object() {
        let ctx = TaskContext {
            primary: WorldObject::new("innkeeper", "A stout innkeeper."),
            secondary: WorldObject::new("mug", "A pewter mug."),
            ..TaskContext::default()
        };
        let answers = DescriptionAnswers::prefilled(&ctx);
        assert_eq!(answers.description_for("innkeeper"), Some("A stout innkeeper."));
        assert_eq!(answers.description_for("mug"), Some("A pewter mug."));
        assert!(answers.tags_for("mug").is_empty());
    }

    #[test]
    fn shared_name_keeps_primary_seed() {
        let ctx = TaskContext {
            primary: WorldObject::new("coin", "A gold coin."),
            secondary: WorldObject::new("coin", "A copper coin."),
            ..TaskContext::default()
        };
        let answers = DescriptionAnswers::prefilled(&ctx);
        assert_eq!(answers.descriptions.len(), 1);
        assert_eq!(answers.description_for("coin"), Some("A gold coin."));
    }
}

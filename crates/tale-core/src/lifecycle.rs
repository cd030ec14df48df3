//! Task envelope and lifecycle flags from the task-hosting runtime.
//!
//! The runtime speaks camelCase (`initialTaskData`, `isPreview`, ...), so these
//! types keep its spelling on the wire.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::context::TaskContext;

/// Lifecycle flags consumed as-is from the runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskLifecycle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_explanation: Option<String>,
    #[serde(default)]
    pub is_preview: bool,
    #[serde(default)]
    pub is_loading: bool,
}

/// Whether the task can currently accept a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Ready,
    Loading,
    Preview,
    Blocked {
        reason: String,
        explanation: Option<String>,
    },
}

impl Availability {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready => f.write_str("ready"),
            Self::Loading => f.write_str("task data is still loading"),
            Self::Preview => f.write_str("task is in preview mode"),
            Self::Blocked {
                reason,
                explanation: Some(explanation),
            } => write!(f, "task is blocked ({reason}): {explanation}"),
            Self::Blocked {
                reason,
                explanation: None,
            } => write!(f, "task is blocked ({reason})"),
        }
    }
}

impl TaskLifecycle {
    /// Blocked wins over loading, which wins over preview.
    #[must_use]
    pub fn availability(&self) -> Availability {
        if let Some(reason) = &self.blocked_reason {
            return Availability::Blocked {
                reason: reason.clone(),
                explanation: self.blocked_explanation.clone(),
            };
        }
        if self.is_loading {
            Availability::Loading
        } else if self.is_preview {
            Availability::Preview
        } else {
            Availability::Ready
        }
    }
}

/// The object handed to a task view when it mounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskEnvelope {
    pub initial_task_data: TaskContext,
    #[serde(flatten)]
    pub lifecycle: TaskLifecycle,
}

impl TaskEnvelope {
    /// An envelope that is ready for submission.
    #[must_use]
    pub fn ready(context: TaskContext) -> Self {
        Self {
            initial_task_data: context,
            lifecycle: TaskLifecycle::default(),
        }
    }

    #[must_use]
    pub const fn context(&self) -> &TaskContext {
        &self.initial_task_data
    }

    #[must_use]
    pub fn availability(&self) -> Availability {
        self.lifecycle.availability()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_takes_precedence() {
        let lifecycle = TaskLifecycle {
            blocked_reason: Some("no_mobile".into()),
            blocked_explanation: Some("Desktop browsers only.".into()),
            is_preview: true,
            is_loading: true,
        };
        assert_eq!(
            lifecycle.availability(),
            Availability::Blocked {
                reason: "no_mobile".into(),
                explanation: Some("Desktop browsers only.".into()),
            }
        );
    }

    #[test]
    fn loading_beats_preview() {
        let lifecycle = TaskLifecycle {
            is_preview: true,
            is_loading: true,
            ..TaskLifecycle::default()
        };
        assert_eq!(lifecycle.availability(), Availability::Loading);
    }

    #[test]
    fn default_is_ready() {
        assert!(TaskLifecycle::default().availability().is_ready());
    }

    #[test]
    fn envelope_uses_runtime_spelling() {
        let json = r#"{
            "initialTaskData": {
                "primary": {"name": "key", "description": "An iron key."},
                "secondary": {"name": "chest", "description": "A locked chest."},
                "narration": "You turn the key in the chest."
            },
            "isPreview": true,
            "blockedReason": null
        }"#;
        let envelope: TaskEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.context().primary.name, "key");
        assert!(envelope.lifecycle.is_preview);
        assert_eq!(envelope.availability(), Availability::Preview);
    }
}

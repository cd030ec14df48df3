//! Submission pipeline configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default payload schema check.
const fn default_verify_payload_schema() -> bool {
    true
}

/// Default outbox directory, relative to the working directory.
fn default_outbox_dir() -> String {
    ".tale/outbox".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmissionConfig {
    /// Check every assembled payload against its registered JSON Schema
    /// before handing it off.
    #[serde(default = "default_verify_payload_schema")]
    pub verify_payload_schema: bool,

    /// Directory the file outbox writes accepted payloads into.
    #[serde(default = "default_outbox_dir")]
    pub outbox_dir: String,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            verify_payload_schema: default_verify_payload_schema(),
            outbox_dir: default_outbox_dir(),
        }
    }
}

impl SubmissionConfig {
    #[must_use]
    pub fn outbox_path(&self) -> PathBuf {
        PathBuf::from(&self.outbox_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SubmissionConfig::default();
        assert!(config.verify_payload_schema);
        assert_eq!(config.outbox_path(), PathBuf::from(".tale/outbox"));
    }
}

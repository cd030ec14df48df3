//! Submit sinks used by `tale submit`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::Value;
use tale_core::enums::TaskKind;
use tale_forms::{SubmitSink, TransportError};

use crate::cli::OutputFormat;
use crate::output;

/// Writes each accepted payload to its own JSON file in an outbox directory.
///
/// Files are named `<task>-<UTC timestamp>.json` so a directory listing keeps
/// submission order.
#[derive(Debug)]
pub struct OutboxSink {
    dir: PathBuf,
    written: Option<PathBuf>,
}

impl OutboxSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: None,
        }
    }

    /// Path of the last payload written, if any.
    pub fn written(&self) -> Option<&Path> {
        self.written.as_deref()
    }
}

impl SubmitSink for OutboxSink {
    fn submit(&mut self, kind: TaskKind, payload: &Value) -> Result<(), TransportError> {
        fs::create_dir_all(&self.dir).map_err(|error| {
            TransportError::new(format!(
                "failed to create outbox {}: {error}",
                self.dir.display()
            ))
        })?;

        let stamp = Utc::now().format("%Y%m%dT%H%M%S%3fZ");
        let path = self.dir.join(format!("{kind}-{stamp}.json"));
        let body = serde_json::to_string_pretty(payload)
            .map_err(|error| TransportError::new(format!("failed to encode payload: {error}")))?;
        fs::write(&path, body).map_err(|error| {
            TransportError::new(format!("failed to write {}: {error}", path.display()))
        })?;

        tracing::info!(task = %kind, path = %path.display(), "payload written to outbox");
        self.written = Some(path);
        Ok(())
    }
}

/// Prints payloads instead of delivering them. Used for `--dry-run`.
#[derive(Debug, Clone, Copy)]
pub struct StdoutSink {
    pub format: OutputFormat,
}

impl SubmitSink for StdoutSink {
    fn submit(&mut self, kind: TaskKind, payload: &Value) -> Result<(), TransportError> {
        tracing::debug!(task = %kind, "dry run, printing payload");
        output::output(payload, self.format).map_err(|error| TransportError::new(error.to_string()))
    }
}

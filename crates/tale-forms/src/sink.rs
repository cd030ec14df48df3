//! Where assembled payloads go.

use serde_json::Value;
use tale_core::enums::TaskKind;

/// The submit endpoint failed to accept a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("submission transport failed: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Receives a serialized payload. Implementations decide the transport.
pub trait SubmitSink {
    /// # Errors
    ///
    /// Returns [`TransportError`] when the payload could not be delivered.
    fn submit(&mut self, kind: TaskKind, payload: &Value) -> Result<(), TransportError>;
}

impl<F> SubmitSink for F
where
    F: FnMut(TaskKind, &Value) -> Result<(), TransportError>,
{
    fn submit(&mut self, kind: TaskKind, payload: &Value) -> Result<(), TransportError> {
        self(kind, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        let mut sink = |kind: TaskKind, payload: &Value| -> Result<(), TransportError> {
            seen.push((kind, payload.clone()));
            Ok(())
        };
        sink.submit(TaskKind::Safety, &json!({"label": "safe"})).unwrap();
        assert_eq!(seen, vec![(TaskKind::Safety, json!({"label": "safe"}))]);
    }

    #[test]
    fn transport_error_display() {
        assert_eq!(
            TransportError::new("connection reset").to_string(),
            "submission transport failed: connection reset"
        );
    }
}

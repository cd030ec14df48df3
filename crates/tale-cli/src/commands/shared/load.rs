use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tale_config::TaleConfig;
use tale_core::enums::TaskKind;
use tale_core::lifecycle::TaskEnvelope;
use tale_forms::TaskVariant;
use tale_schema::{SchemaRegistry, names};

/// Resolve `--task`, falling back to `general.default_task`.
pub fn resolve_task(raw: Option<&str>, config: &TaleConfig) -> anyhow::Result<TaskKind> {
    raw.map_or(Ok(config.general.default_task), |value| {
        value
            .parse::<TaskKind>()
            .map_err(|error| anyhow::anyhow!("invalid task '{value}': {error}"))
    })
}

/// Read a JSON file and check it against a registered schema before use.
pub fn read_checked(path: &Path, schema: &str, registry: &SchemaRegistry) -> anyhow::Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    registry
        .validate(schema, &value)
        .with_context(|| format!("{} does not match the {schema} schema", path.display()))?;
    Ok(value)
}

fn decode<T: DeserializeOwned>(path: &Path, value: Value) -> anyhow::Result<T> {
    serde_json::from_value(value).with_context(|| format!("failed to decode {}", path.display()))
}

pub fn load_envelope(path: &Path, registry: &SchemaRegistry) -> anyhow::Result<TaskEnvelope> {
    let value = read_checked(path, names::TASK_ENVELOPE, registry)?;
    decode(path, value)
}

pub fn load_answers<V: TaskVariant>(
    path: &Path,
    registry: &SchemaRegistry,
) -> anyhow::Result<V::Answers> {
    let value = read_checked(path, V::ANSWERS_SCHEMA, registry)?;
    decode(path, value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tale_forms::Safety;

    use super::*;

    fn write(dir: &Path, name: &str, value: &Value) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[test]
    fn task_falls_back_to_config_default() {
        let mut config = TaleConfig::default();
        config.general.default_task = TaskKind::Description;
        assert_eq!(resolve_task(None, &config).unwrap(), TaskKind::Description);
        assert_eq!(resolve_task(Some("safety"), &config).unwrap(), TaskKind::Safety);
    }

    #[test]
    fn unknown_task_is_an_error() {
        let err = resolve_task(Some("translation"), &TaleConfig::default()).unwrap_err();
        assert!(err.to_string().contains("invalid task 'translation'"));
    }

    #[test]
    fn envelope_is_loaded_from_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "task.json",
            &json!({
                "initialTaskData": {
                    "primary": {"name": "key", "description": "A rusty key."},
                    "secondary": {"name": "chest", "description": "A locked chest."},
                    "narration": "You turn the key in the chest."
                },
                "isPreview": true
            }),
        );
        let envelope = load_envelope(&path, &SchemaRegistry::new()).unwrap();
        assert_eq!(envelope.context().primary.name, "key");
        assert!(envelope.lifecycle.is_preview);
    }

    #[test]
    fn schema_mismatch_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "answers.json", &json!({"is_safe": "maybe"}));
        let err = load_answers::<Safety>(&path, &SchemaRegistry::new()).unwrap_err();
        assert!(
            err.to_string().contains("does not match the safety_answers schema"),
            "unexpected error: {err}"
        );
    }
}

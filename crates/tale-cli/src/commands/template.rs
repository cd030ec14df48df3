use tale_config::TaleConfig;
use tale_core::lifecycle::TaskEnvelope;
use tale_forms::TaskVariant;
use tale_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TemplateArgs;
use crate::commands::shared::load::{load_envelope, resolve_task};
use crate::output::output;

/// Handle `tale template`.
pub fn handle(args: &TemplateArgs, config: &TaleConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let envelope = load_envelope(&args.envelope, &registry)?;
    let task = resolve_task(args.task.as_deref(), config)?;
    for_task!(task, run(&envelope, flags))
}

fn run<V: TaskVariant>(envelope: &TaskEnvelope, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&V::prefill(envelope.context()), flags.format)
}

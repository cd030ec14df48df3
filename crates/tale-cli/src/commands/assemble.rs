use tale_config::TaleConfig;
use tale_core::lifecycle::TaskEnvelope;
use tale_forms::{TaskVariant, assemble, check};
use tale_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TaskArgs;
use crate::commands::shared::load::{load_answers, load_envelope, resolve_task};
use crate::output::output;

/// Handle `tale assemble`.
pub fn handle(args: &TaskArgs, config: &TaleConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let envelope = load_envelope(&args.envelope, &registry)?;
    let task = resolve_task(args.task.as_deref(), config)?;
    for_task!(task, run(args, &envelope, &registry, flags))
}

fn run<V: TaskVariant>(
    args: &TaskArgs,
    envelope: &TaskEnvelope,
    registry: &SchemaRegistry,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let answers = load_answers::<V>(&args.answers, registry)?;
    let validated = check::<V>(&answers, envelope.context())
        .map_err(|errors| anyhow::anyhow!("answer set is incomplete:\n{errors}"))?;
    output(&assemble(&validated), flags.format)
}

use serde::Serialize;
use tale_config::TaleConfig;
use tale_core::enums::TaskKind;
use tale_core::lifecycle::TaskEnvelope;
use tale_forms::{ErrorList, TaskVariant, validate_answers};
use tale_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TaskArgs;
use crate::commands::shared::load::{load_answers, load_envelope, resolve_task};
use crate::output::output;

#[derive(Debug, Serialize)]
struct ValidationReport {
    task: TaskKind,
    complete: bool,
    errors: ErrorList,
}

/// Handle `tale validate`. Fails after printing the report when incomplete.
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
    let report = report::<V>(&answers, envelope);
    output(&report, flags.format)?;
    if !report.complete {
        anyhow::bail!("answer set is incomplete ({} unanswered)", report.errors.len());
    }
    Ok(())
}

fn report<V: TaskVariant>(answers: &V::Answers, envelope: &TaskEnvelope) -> ValidationReport {
    let errors = validate_answers::<V>(answers, envelope.context());
    ValidationReport {
        task: V::KIND,
        complete: errors.is_empty(),
        errors,
    }
}

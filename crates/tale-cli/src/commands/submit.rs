use std::path::PathBuf;

use serde::Serialize;
use tale_config::TaleConfig;
use tale_core::enums::{SubmissionState, TaskKind};
use tale_core::lifecycle::TaskEnvelope;
use tale_forms::{
    SubmissionController, SubmitOptions, SubmitOutcome, SubmitSink, TaskVariant,
};
use tale_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::commands::shared::load::{load_answers, load_envelope, resolve_task};
use crate::output::output;
use crate::sink::{OutboxSink, StdoutSink};

#[derive(Debug, Serialize)]
struct SubmitReport {
    task: TaskKind,
    state: SubmissionState,
    path: Option<PathBuf>,
}

/// Handle `tale submit`.
pub fn handle(args: &SubmitArgs, config: &TaleConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let envelope = load_envelope(&args.input.envelope, &registry)?;
    let task = resolve_task(args.input.task.as_deref(), config)?;
    for_task!(task, run(args, envelope, &registry, config, flags))
}

fn run<V: TaskVariant>(
    args: &SubmitArgs,
    envelope: TaskEnvelope,
    registry: &SchemaRegistry,
    config: &TaleConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let answers = load_answers::<V>(&args.input.answers, registry)?;
    let options = SubmitOptions {
        verify_payload_schema: config.submission.verify_payload_schema,
    };
    let mut controller = SubmissionController::<V>::with_answers(envelope, answers, options);

    if args.dry_run {
        let mut sink = StdoutSink {
            format: flags.format,
        };
        return submit(&mut controller, &mut sink);
    }

    let outbox = args
        .outbox
        .clone()
        .unwrap_or_else(|| config.submission.outbox_path());
    let mut sink = OutboxSink::new(outbox);
    submit(&mut controller, &mut sink)?;
    output(
        &SubmitReport {
            task: V::KIND,
            state: controller.state(),
            path: sink.written().map(PathBuf::from),
        },
        flags.format,
    )
}

fn submit<V: TaskVariant>(
    controller: &mut SubmissionController<V>,
    sink: &mut dyn SubmitSink,
) -> anyhow::Result<()> {
    match controller.submit(sink)? {
        SubmitOutcome::Submitted(_) => Ok(()),
        SubmitOutcome::Rejected(errors) => {
            anyhow::bail!("answer set is incomplete:\n{errors}")
        }
    }
}

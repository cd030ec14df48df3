use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the pre-filled answer set for a task envelope.
    Template(TemplateArgs),
    /// Report which required questions are still unanswered.
    Validate(TaskArgs),
    /// Print the submission payload for a complete answer set.
    Assemble(TaskArgs),
    /// Validate, assemble, and hand the payload to the outbox.
    Submit(SubmitArgs),
    /// Print a registered JSON Schema.
    Schema(SchemaArgs),
}

/// Arguments for `tale template`.
#[derive(Clone, Debug, Args)]
pub struct TemplateArgs {
    /// Task envelope JSON (`initialTaskData` plus lifecycle flags).
    #[arg(long)]
    pub envelope: PathBuf,
    /// Task variant: interaction, description, safety
    #[arg(long)]
    pub task: Option<String>,
}

/// Inputs shared by `tale validate`, `tale assemble`, and `tale submit`.
#[derive(Clone, Debug, Args)]
pub struct TaskArgs {
    /// Task envelope JSON (`initialTaskData` plus lifecycle flags).
    #[arg(long)]
    pub envelope: PathBuf,
    /// Answer set JSON.
    #[arg(long)]
    pub answers: PathBuf,
    /// Task variant: interaction, description, safety
    #[arg(long)]
    pub task: Option<String>,
}

/// Arguments for `tale submit`.
#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub input: TaskArgs,
    /// Print the payload instead of writing it to the outbox.
    #[arg(long)]
    pub dry_run: bool,
    /// Outbox directory (defaults to `submission.outbox_dir`).
    #[arg(long)]
    pub outbox: Option<PathBuf>,
}

/// Arguments for `tale schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name, e.g. `interaction_submission`.
    pub name: Option<String>,
    /// List registered schema names.
    #[arg(long)]
    pub list: bool,
}

//! CLI argument parsing for manifest generation.
//!
//! Flags mirror the orchestrator's documented invocation; the bare command
//! generates a manifest and `notes` reads the converted documentation.
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "runner-manifest",
    version,
    about = "Generate a runner capability manifest by scanning repo docs",
    after_help = "Examples:\n  runner-manifest --runner-id qcity-001 --apply\n  runner-manifest --dry-run --tags gpu,linux\n  runner-manifest notes --accessor doit"
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Emit debug logs to stderr (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Notes(NotesArgs),
}

/// Generation inputs; used when no subcommand is given.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Runner identifier (defaults to the local host name)
    #[arg(long, value_name = "ID")]
    pub runner_id: Option<String>,

    /// Comma-separated tags
    #[arg(long, value_name = "TAGS", default_value = "")]
    pub tags: String,

    /// Write manifest to .qmoi/runner_manifest.json under the root
    #[arg(long, conflicts_with = "dry_run")]
    pub apply: bool,

    /// Print the manifest without writing it (the default)
    #[arg(long)]
    pub dry_run: bool,

    /// Repo root to scan
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

/// Notes command inputs.
#[derive(Parser, Debug)]
#[command(about = "Print the converted documentation text")]
pub struct NotesArgs {
    /// Which accessor to read through
    #[arg(long, value_enum, default_value_t = AccessorArg::Doit)]
    pub accessor: AccessorArg,

    /// Repo root holding docs/converted
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AccessorArg {
    Avatars,
    Doit,
}

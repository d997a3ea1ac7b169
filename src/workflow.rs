use crate::cli::{AccessorArg, GenerateArgs, NotesArgs};
use crate::detect::detect_capabilities;
use crate::manifest::{build_manifest, parse_tags};
use crate::notes::NotesAccessor;
use crate::output::{render_manifest, write_manifest};
use crate::patterns::CapabilityTable;
use crate::scan::scan_files;
use crate::util::display_path;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Print,
    Apply,
}

/// Generation inputs after CLI defaults are resolved.
#[derive(Debug)]
struct GenerateRequest {
    root: PathBuf,
    runner_id: Option<String>,
    tags: Vec<String>,
    mode: OutputMode,
}

impl GenerateRequest {
    fn from_args(args: GenerateArgs) -> Result<Self> {
        let root = resolve_root(&args.root)?;
        let mode = if args.apply {
            OutputMode::Apply
        } else {
            OutputMode::Print
        };
        Ok(Self {
            root,
            runner_id: args.runner_id,
            tags: parse_tags(&args.tags),
            mode,
        })
    }
}

pub fn run_generate(args: GenerateArgs) -> Result<()> {
    let request = GenerateRequest::from_args(args)?;
    let table = CapabilityTable::builtin()?;
    let files = scan_files(&request.root)?;
    for file in &files {
        tracing::debug!(file = %display_path(file, Some(&request.root)), "scanning");
    }
    let caps = detect_capabilities(&files, &table);

    let manifest = build_manifest(request.runner_id.as_deref(), request.tags, caps)?;

    println!("Discovered capabilities: {:?}", manifest.capabilities);
    match request.mode {
        OutputMode::Apply => {
            let path = write_manifest(&request.root, &manifest)?;
            println!("Wrote manifest to {}", path.display());
        }
        OutputMode::Print => {
            println!("{}", render_manifest(&manifest)?);
        }
    }
    Ok(())
}

pub fn run_notes(args: NotesArgs) -> Result<()> {
    let accessor = match args.accessor {
        AccessorArg::Avatars => NotesAccessor::Avatars,
        AccessorArg::Doit => NotesAccessor::Doit,
    };
    let text = accessor.get_notes(&args.root)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("write notes to stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn resolve_root(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .with_context(|| format!("resolve root {}", path.display()))
}

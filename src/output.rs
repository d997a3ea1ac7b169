//! Manifest output: stdout rendering or the well-known manifest file.
use crate::manifest::Manifest;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest location relative to the scanned root.
pub const MANIFEST_REL_PATH: &str = ".qmoi/runner_manifest.json";

pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_REL_PATH)
}

pub fn render_manifest(manifest: &Manifest) -> Result<String> {
    serde_json::to_string_pretty(manifest).context("serialize manifest")
}

/// Write `manifest` under `root`, replacing any previous file.
pub fn write_manifest(root: &Path, manifest: &Manifest) -> Result<PathBuf> {
    let path = manifest_path(root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let json = render_manifest(manifest)?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "manifest written");
    Ok(path)
}

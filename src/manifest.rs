//! Runner manifest record and builder.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Runner identity and declared abilities, as read by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub runner_id: String,
    pub hostname: String,
    pub capabilities: Vec<String>,
    pub tags: Vec<String>,
    pub generated_at: u64,
}

/// Build a manifest stamped with the current time and local host name.
///
/// A missing or empty `runner_id` falls back to the host name.
pub fn build_manifest(
    runner_id: Option<&str>,
    tags: Vec<String>,
    capabilities: Vec<String>,
) -> Result<Manifest> {
    let hostname = local_hostname()?;
    let runner_id = runner_id
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| hostname.clone());
    Ok(Manifest {
        runner_id,
        hostname,
        capabilities,
        tags,
        generated_at: unix_now()?,
    })
}

/// Split a comma-separated tag list, trimming entries and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn unix_now() -> Result<u64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the Unix epoch")?;
    Ok(elapsed.as_secs())
}

pub fn local_hostname() -> Result<String> {
    let name = gethostname::gethostname()
        .into_string()
        .map_err(|raw| anyhow!("host name is not valid UTF-8: {}", raw.to_string_lossy()))?;
    if name.is_empty() {
        return Err(anyhow!("host name is empty"));
    }
    Ok(name)
}

//! Capability detection over scanned files.
//!
//! Detection is a set union of matching labels, so the result is independent
//! of the order files are visited in.
use crate::patterns::CapabilityTable;
use crate::util::truncate_chars;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Characters of file content considered per file.
pub const CONTENT_PREFIX_CHARS: usize = 4000;

/// Sorted, duplicate-free labels detected across `files`.
///
/// Files that cannot be read are skipped.
pub fn detect_capabilities(files: &[PathBuf], table: &CapabilityTable) -> Vec<String> {
    let mut caps = BTreeSet::new();
    for path in files {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "skipping unreadable file");
                continue;
            }
        };
        let text = decode_dropping_invalid(&bytes);
        let name = file_name(path);
        caps.extend(capabilities_for(table, &name, &text));
    }
    tracing::info!(
        files = files.len(),
        capabilities = caps.len(),
        "capability detection complete"
    );
    caps.into_iter().map(str::to_string).collect()
}

/// Labels matched by one file's name and leading content.
pub fn capabilities_for(
    table: &CapabilityTable,
    name: &str,
    content: &str,
) -> BTreeSet<&'static str> {
    let haystack = format!("{name}\n{}", truncate_chars(content, CONTENT_PREFIX_CHARS));
    table.matching_labels(&haystack).collect()
}

/// Decode UTF-8, deleting invalid byte sequences rather than replacing them.
fn decode_dropping_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

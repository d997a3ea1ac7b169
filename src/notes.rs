//! Accessors for the converted documentation text.
//!
//! Both accessors read the same extracted document; they exist so callers
//! keep addressing the notes by their historical names.
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DOC_TEXTS_REL_PATH: &str = "docs/converted/qmoi_doctexts.md";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotesAccessor {
    Avatars,
    Doit,
}

impl NotesAccessor {
    pub fn name(self) -> &'static str {
        match self {
            NotesAccessor::Avatars => "avatars",
            NotesAccessor::Doit => "doit",
        }
    }

    pub fn source_path(self, root: &Path) -> PathBuf {
        match self {
            NotesAccessor::Avatars | NotesAccessor::Doit => root.join(DOC_TEXTS_REL_PATH),
        }
    }

    /// Full document text, or an empty string when the document is absent.
    pub fn get_notes(self, root: &Path) -> Result<String> {
        let path = self.source_path(root);
        if !path.exists() {
            tracing::debug!(accessor = self.name(), path = %path.display(), "notes absent");
            return Ok(String::new());
        }
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}

//! Recursive discovery of documentation and config files.
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions considered for capability detection (case-sensitive).
pub const DOC_EXTENSIONS: &[&str] = &["md", "yml", "yaml"];

/// Collect every doc/config file beneath `root`.
///
/// The root itself must be readable; nested directories that cannot be read
/// are skipped. Symlinked directories are not followed.
pub fn scan_files(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root).with_context(|| format!("read {}", root.display()))?;
    let mut files = Vec::new();
    collect_entries(entries, &mut files);
    files.sort();
    tracing::debug!(root = %root.display(), files = files.len(), "scan complete");
    Ok(files)
}

fn collect_entries(entries: fs::ReadDir, files: &mut Vec<PathBuf>) {
    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            match fs::read_dir(&path) {
                Ok(nested) => collect_entries(nested, files),
                Err(err) => {
                    tracing::debug!(path = %path.display(), %err, "skipping unreadable directory");
                }
            }
        } else if path.is_file() && has_doc_extension(&path) {
            files.push(path);
        }
    }
}

fn has_doc_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DOC_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_nested_docs_and_ignores_other_extensions() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::create_dir_all(root.join("docs/deep")).expect("mkdir");
        fs::write(root.join("README.md"), "readme").expect("write");
        fs::write(root.join("docs/deep/ci.yml"), "ci").expect("write");
        fs::write(root.join("docs/deploy.yaml"), "deploy").expect("write");
        fs::write(root.join("main.rs"), "fn main() {}").expect("write");
        fs::write(root.join("notes.MD"), "upper").expect("write");

        let files = scan_files(root).expect("scan");
        let rel: Vec<String> = files
            .iter()
            .map(|path| {
                path.strip_prefix(root)
                    .expect("under root")
                    .display()
                    .to_string()
            })
            .collect();
        assert_eq!(rel, vec!["README.md", "docs/deep/ci.yml", "docs/deploy.yaml"]);
    }

    #[test]
    fn empty_root_yields_no_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert!(scan_files(temp.path()).expect("scan").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_included_but_symlinked_dirs_are_not_followed() {
        use std::os::unix::fs::symlink;

        let outside = tempfile::tempdir().expect("tempdir");
        fs::write(outside.path().join("linked.md"), "linked").expect("write");
        fs::write(outside.path().join("target.md"), "target").expect("write");

        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        symlink(outside.path(), root.join("linked-dir")).expect("symlink dir");
        symlink(outside.path().join("target.md"), root.join("alias.md")).expect("symlink file");

        let files = scan_files(root).expect("scan");
        assert_eq!(files, vec![root.join("alias.md")]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_nested_directory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        let locked = root.join("locked");
        fs::create_dir_all(&locked).expect("mkdir");
        fs::write(locked.join("hidden.md"), "hidden").expect("write");
        fs::write(root.join("visible.md"), "visible").expect("write");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");
        // Privileged users can still list the directory.
        let locked_readable = fs::read_dir(&locked).is_ok();

        let result = scan_files(root);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("restore");

        let files = result.expect("scan succeeds");
        assert!(files.contains(&root.join("visible.md")));
        assert_eq!(
            files.contains(&locked.join("hidden.md")),
            locked_readable
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("nope");
        let err = scan_files(&missing).expect_err("missing root");
        assert!(err.to_string().contains("nope"));
    }
}

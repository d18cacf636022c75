use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, ResultExt, path_context};

/// Case-insensitive set of file extensions, stored as lower-case `.ext`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: Vec<String>,
}

impl ExtensionSet {
    /// Build from user-supplied extensions, with or without a leading dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{}", ext))
            .collect();
        Self { suffixes }
    }

    /// Check whether a path's final extension is in the set.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            return false;
        };
        let suffix = format!(".{}", ext.to_lowercase());
        self.suffixes.contains(&suffix)
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

/// Scans the given root directory recursively for files with a matching extension.
///
/// Returns absolute paths in traversal order. Symlinks to files are included,
/// symlinks to directories are not descended into. A missing or unreadable
/// root aborts the scan; unreadable entries below it are skipped with a warning.
pub fn scan(root: &Path, extensions: &ExtensionSet) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                tracing::warn!(path = ?e.path(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || !extensions.matches(path) {
            continue;
        }
        let absolute =
            std::fs::canonicalize(path).with_context(path_context("Failed to resolve", path))?;
        tracing::trace!(path = %absolute.display(), "Matched");
        found.push(absolute);
    }

    tracing::debug!(root = %root.display(), count = found.len(), "Scan finished");
    Ok(found)
}

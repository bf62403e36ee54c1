//! Recursive certificate discovery
//!
//! Walks a directory tree and collects every regular file carrying the
//! configured suffix, in a deterministic order.

use crate::models::ScanOutcome;
use crate::scanner::EndDateSource;
use crate::utils::ScanError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Scan configuration.
///
/// Replaces the edit-the-source constants of earlier revisions: the caller
/// passes everything in explicitly.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory to start the search from
    pub root: PathBuf,
    /// Filename suffix identifying certificate files
    pub suffix: String,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: ".pem".to_string(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// Recursively enumerate every regular file under `root` whose name ends
/// with `suffix`. Each matching file appears exactly once; directories are
/// visited depth-first in sorted order so output is stable.
pub fn find_certificates(root: &Path, suffix: &str) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound {
            path: root.display().to_string(),
        });
    }
    if !root.is_dir() {
        return Err(ScanError::RootNotADirectory {
            path: root.display().to_string(),
        });
    }

    let mut found = Vec::new();
    walk_dir(root, suffix, &mut found)?;
    Ok(found)
}

fn walk_dir(dir: &Path, suffix: &str, found: &mut Vec<PathBuf>) -> Result<(), ScanError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ScanError::ReadDirFailed {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            walk_dir(&path, suffix, found)?;
        } else if path.is_file() && has_suffix(&path, suffix) {
            found.push(path);
        }
    }

    Ok(())
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(suffix))
        .unwrap_or(false)
}

/// Walk the tree and check every certificate file with the given source.
///
/// A file that fails produces a failure outcome for that file only; the
/// scan always continues to the end. No result aggregation beyond the
/// returned list, no retry, no timeout.
pub fn scan(
    config: &ScanConfig,
    source: &dyn EndDateSource,
) -> Result<Vec<ScanOutcome>, ScanError> {
    let files = find_certificates(&config.root, &config.suffix)?;
    debug!(count = files.len(), root = %config.root.display(), "found certificate files");

    Ok(files
        .into_iter()
        .map(|path| {
            let result = source.end_date(&path);
            ScanOutcome { path, result }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_match_is_literal() {
        assert!(has_suffix(Path::new("/a/b/cert.pem"), ".pem"));
        assert!(has_suffix(Path::new("/a/b/archive.tar.pem"), ".pem"));
        assert!(!has_suffix(Path::new("/a/b/cert.pem.bak"), ".pem"));
        assert!(!has_suffix(Path::new("/a/b/cert.der"), ".pem"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let err = find_certificates(Path::new("/definitely/not/here"), ".pem").unwrap_err();
        assert!(matches!(err, ScanError::RootNotFound { .. }));
    }
}

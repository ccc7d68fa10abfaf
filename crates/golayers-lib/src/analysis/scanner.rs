//! Source tree traversal
//!
//! Walks a root directory and yields the candidate source files in a stable
//! order. Test files are never visited.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{trace, warn};
use walkdir::WalkDir;

/// Extension of files considered for analysis
pub const SOURCE_EXTENSION: &str = "go";

/// File name suffix that marks a test file
pub const TEST_SUFFIX: &str = "_test.go";

/// Errors raised while reading individual source files
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read source file: {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Walks a root directory for source files
#[derive(Debug, Clone)]
pub struct SourceScanner {
    root: PathBuf,
}

impl SourceScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check whether a path names an eligible (non-test) source file
    pub fn is_source_file(path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
            && !name.ends_with(TEST_SUFFIX)
    }

    /// Collect every eligible source file beneath the root
    ///
    /// Entries are visited in file-name order so repeated scans of the same
    /// tree return the same sequence. Unreadable directory entries are
    /// skipped with a warning.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };

            if entry.file_type().is_file() && Self::is_source_file(entry.path()) {
                trace!("Found source file: {}", entry.path().display());
                files.push(entry.into_path());
            }
        }

        files
    }

    /// Read a source file's text
    pub fn read_source(path: &Path) -> Result<String, ScanError> {
        std::fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("scanner.test.rs");
}

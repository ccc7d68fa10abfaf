//! Module manifest (`go.mod`) handling
//!
//! The module prefix qualifies every local package identifier. It is read
//! once per analysis; without it no package can be named, so every failure
//! here is fatal for the run.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Manifest file expected at the scan root
pub const MANIFEST_FILE: &str = "go.mod";

/// Errors raised while resolving the module prefix
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read module manifest: {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No `module <path>` declaration found in {path}")]
    MissingModuleDirective { path: PathBuf },
}

/// Root namespace under which local packages are qualified
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModulePrefix(String);

impl ModulePrefix {
    /// Wrap an already-known prefix (trailing slashes are dropped)
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self(prefix.trim_end_matches('/').to_string())
    }

    /// Read the prefix from the manifest at `root`
    pub fn from_root(root: &Path) -> Result<Self, ManifestError> {
        let path = root.join(MANIFEST_FILE);
        debug!("Reading module manifest: {}", path.display());

        let content =
            std::fs::read_to_string(&path).map_err(|source| ManifestError::Unreadable {
                path: path.clone(),
                source,
            })?;

        Self::parse(&content).ok_or(ManifestError::MissingModuleDirective { path })
    }

    /// Extract the first `module <identifier>` declaration from manifest text
    pub fn parse(content: &str) -> Option<Self> {
        content.lines().find_map(|line| {
            let rest = line.trim_start().strip_prefix("module")?;
            // `module` must be a whole word, e.g. not `modulename foo`
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }

            let rest = match rest.find("//") {
                Some(idx) => &rest[..idx],
                None => rest,
            };
            let ident = rest.split_whitespace().next()?.trim_matches('"');

            (!ident.is_empty()).then(|| Self::new(ident))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModulePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModulePrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    include!("manifest.test.rs");
}

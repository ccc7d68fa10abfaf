//! Package identifiers derived from file locations
//!
//! One directory is one package: every file in a directory maps to the same
//! identifier, `<module prefix>/<relative dir>` with `/` separators on all
//! platforms. Files directly in the root map to the bare module prefix.

use super::manifest::ModulePrefix;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

/// Canonical separator used inside package identifiers
pub const PACKAGE_SEPARATOR: &str = "/";

/// Maps source file paths to package identifiers
#[derive(Debug, Clone)]
pub struct PackageNamer {
    root: PathBuf,
    prefix: ModulePrefix,
}

impl PackageNamer {
    pub fn new(root: &Path, prefix: ModulePrefix) -> Self {
        Self {
            root: absolutize(root),
            prefix,
        }
    }

    pub fn prefix(&self) -> &ModulePrefix {
        &self.prefix
    }

    /// Identifier of the package a file belongs to
    ///
    /// Files outside the root degrade to the base name of their parent
    /// directory (or the bare prefix when the parent has no name) instead
    /// of failing.
    pub fn package_for(&self, file: &Path) -> String {
        let file = absolutize(file);
        let dir = file.parent().unwrap_or(&file);

        match dir.strip_prefix(&self.root) {
            Ok(relative) => self.qualify(relative),
            Err(_) => {
                warn!(
                    "File {} is outside {}; naming it by its parent directory",
                    file.display(),
                    self.root.display()
                );
                dir.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| self.prefix.to_string())
            }
        }
    }

    fn qualify(&self, relative: &Path) -> String {
        let segments: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        if segments.is_empty() {
            self.prefix.to_string()
        } else {
            format!(
                "{}{}{}",
                self.prefix,
                PACKAGE_SEPARATOR,
                segments.join(PACKAGE_SEPARATOR)
            )
        }
    }
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    include!("naming.test.rs");
}

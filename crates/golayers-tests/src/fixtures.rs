//! On-disk Go module fixtures
//!
//! Builds small module trees in a temporary directory so analysis and
//! command handlers can run against real files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary Go module rooted at [`root`](Self::root)
pub struct GoTreeFixture {
    temp_dir: TempDir,
    prefix: String,
}

impl GoTreeFixture {
    /// Create a module whose `go.mod` declares `prefix`
    pub fn new(prefix: &str) -> Result<Self> {
        let fixture = Self::without_manifest()?;
        fixture.write("go.mod", &format!("module {}\n\ngo 1.22\n", prefix))?;
        Ok(Self {
            prefix: prefix.to_string(),
            ..fixture
        })
    }

    /// Create an empty directory with no `go.mod`
    pub fn without_manifest() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new().context("Failed to create fixture directory")?,
            prefix: String::new(),
        })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Identifier of the local package in `dir` (relative to the root)
    pub fn package_id(&self, dir: &str) -> String {
        if dir.is_empty() {
            self.prefix.clone()
        } else {
            format!("{}/{}", self.prefix, dir)
        }
    }

    /// Write a raw file below the root
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write `<dir>/<dir>.go` declaring a package with a grouped import block
    pub fn package(&self, dir: &str, imports: &[&str]) -> Result<PathBuf> {
        let name = dir.rsplit('/').next().filter(|s| !s.is_empty()).unwrap_or("main");
        let file = if dir.is_empty() {
            "main.go".to_string()
        } else {
            format!("{}/{}.go", dir, name)
        };
        self.write(&file, &go_source(name, imports))
    }

    /// Builder form of [`package`](Self::package)
    pub fn with_package(self, dir: &str, imports: &[&str]) -> Result<Self> {
        self.package(dir, imports)?;
        Ok(self)
    }
}

/// Go source text for a package importing `imports`
pub fn go_source(name: &str, imports: &[&str]) -> String {
    let mut source = format!("package {}\n", name);
    match imports {
        [] => {}
        [single] => source.push_str(&format!("\nimport \"{}\"\n", single)),
        many => {
            source.push_str("\nimport (\n");
            for import in many {
                source.push_str(&format!("\t\"{}\"\n", import));
            }
            source.push_str(")\n");
        }
    }
    source.push_str("\nfunc init() {}\n");
    source
}

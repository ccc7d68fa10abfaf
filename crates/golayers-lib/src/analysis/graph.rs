//! Package dependency graph construction
//!
//! The graph is stored in *dependents* orientation: `graph[X]` holds the
//! packages that import `X`. Roots (packages with nothing left to wait on)
//! are therefore the in-degree-zero nodes, which is what the layered sort
//! consumes first.

use super::imports::{ImportExtractor, LexicalImportExtractor};
use super::manifest::{ManifestError, ModulePrefix};
use super::naming::PackageNamer;
use super::scanner::SourceScanner;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Canonical package name: local (`prefix/dir`) or a raw external import path
pub type PackageId = String;

/// Errors that abort graph construction before any file is scanned
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Not a directory: {path}")]
    InvalidRoot { path: PathBuf },

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Dependency -> dependents adjacency, free of self-loops
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    dependents: BTreeMap<PackageId, BTreeSet<PackageId>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node with no edges (idempotent)
    pub fn add_node(&mut self, id: &str) -> bool {
        if self.dependents.contains_key(id) {
            return false;
        }
        self.dependents.insert(id.to_string(), BTreeSet::new());
        true
    }

    /// Record that `dependent` imports `dependency`
    ///
    /// Returns `true` only when a new edge was stored. Self-loops are
    /// rejected. Both endpoints become nodes either way.
    pub fn add_edge(&mut self, dependency: &str, dependent: &str) -> bool {
        self.add_node(dependent);
        if dependency == dependent {
            return false;
        }

        self.dependents
            .entry(dependency.to_string())
            .or_default()
            .insert(dependent.to_string())
    }

    /// Packages that import `id`
    pub fn dependents(&self, id: &str) -> impl Iterator<Item = &str> {
        self.dependents
            .get(id)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Packages that `id` imports (reverse lookup over the stored edges)
    pub fn dependencies_of(&self, id: &str) -> Vec<&str> {
        self.dependents
            .iter()
            .filter(|(_, dependents)| dependents.contains(id))
            .map(|(dependency, _)| dependency.as_str())
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.dependents.contains_key(id)
    }

    pub fn has_edge(&self, dependency: &str, dependent: &str) -> bool {
        self.dependents
            .get(dependency)
            .is_some_and(|set| set.contains(dependent))
    }

    /// All nodes in lexicographic order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.dependents.keys().map(String::as_str)
    }

    /// All `(dependency, dependent)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dependents.iter().flat_map(|(dependency, dependents)| {
            dependents
                .iter()
                .map(move |dependent| (dependency.as_str(), dependent.as_str()))
        })
    }

    pub fn node_count(&self) -> usize {
        self.dependents.len()
    }

    pub fn edge_count(&self) -> usize {
        self.dependents.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }

    /// Fresh in-degree table derived from the stored edges
    ///
    /// The layered sort consumes its table, so every sort attempt should
    /// start from a table produced here (or a clone of the builder's).
    pub fn in_degrees(&self) -> InDegree {
        let mut in_degree = InDegree::new();
        for node in self.nodes() {
            in_degree.ensure(node);
        }
        for (_, dependent) in self.edges() {
            in_degree.increment(dependent);
        }
        in_degree
    }

    /// Same graph as a petgraph `DiGraph` (edges point dependency -> dependent)
    pub fn to_petgraph(&self) -> DiGraph<PackageId, ()> {
        let mut graph = DiGraph::with_capacity(self.node_count(), self.edge_count());
        let mut index: HashMap<&str, NodeIndex> = HashMap::new();

        for node in self.nodes() {
            index.insert(node, graph.add_node(node.to_string()));
        }
        for (dependency, dependent) in self.edges() {
            graph.add_edge(index[dependency], index[dependent], ());
        }

        graph
    }
}

/// Count of unresolved dependencies per package; missing keys read as zero
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InDegree(BTreeMap<PackageId, usize>);

impl InDegree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> usize {
        self.0.get(id).copied().unwrap_or(0)
    }

    /// Make sure `id` has an explicit entry
    pub fn ensure(&mut self, id: &str) {
        if !self.0.contains_key(id) {
            self.0.insert(id.to_string(), 0);
        }
    }

    pub fn increment(&mut self, id: &str) {
        *self.0.entry(id.to_string()).or_insert(0) += 1;
    }

    /// Decrement and return the new count (saturates at zero)
    pub fn decrement(&mut self, id: &str) -> usize {
        let count = self.0.entry(id.to_string()).or_insert(0);
        *count = count.saturating_sub(1);
        *count
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Packages whose count is zero, in lexicographic order
    pub fn zero_nodes(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(id, _)| id.as_str())
    }

    /// Packages whose count is still above zero
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(id, count)| (id.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Every identifier encountered, with the locally defined subset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageUniverse {
    all: BTreeSet<PackageId>,
    local: BTreeSet<PackageId>,
}

impl PackageUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a package backed by at least one source file
    pub fn insert_local(&mut self, id: &str) {
        self.all.insert(id.to_string());
        self.local.insert(id.to_string());
    }

    /// Record a package seen only as an import
    ///
    /// Never demotes a local package: local definitions are authoritative
    /// when a local identifier and an import path coincide.
    pub fn insert_referenced(&mut self, id: &str) {
        self.all.insert(id.to_string());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.all.contains(id)
    }

    pub fn is_local(&self, id: &str) -> bool {
        self.local.contains(id)
    }

    pub fn is_external(&self, id: &str) -> bool {
        self.all.contains(id) && !self.local.contains(id)
    }

    pub fn local(&self) -> &BTreeSet<PackageId> {
        &self.local
    }

    pub fn external(&self) -> BTreeSet<PackageId> {
        self.all.difference(&self.local).cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.all.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Source files backing each local package, in scan order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageFileIndex(BTreeMap<PackageId, Vec<PathBuf>>);

impl PackageFileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: &str, file: PathBuf) {
        self.0.entry(id.to_string()).or_default().push(file);
    }

    pub fn files(&self, id: &str) -> &[PathBuf] {
        self.0.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A source file skipped because its text could not be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReadFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything one build pass produces
#[derive(Debug, Clone)]
pub struct GraphBuild {
    pub graph: DependencyGraph,
    pub in_degree: InDegree,
    pub universe: PackageUniverse,
    pub files: PackageFileIndex,
    pub module_prefix: ModulePrefix,
    pub read_failures: Vec<FileReadFailure>,
}

impl GraphBuild {
    pub fn local_packages(&self) -> &BTreeSet<PackageId> {
        self.universe.local()
    }

    pub fn external_packages(&self) -> BTreeSet<PackageId> {
        self.universe.external()
    }

    /// True when no package was defined or referenced at all
    pub fn is_empty(&self) -> bool {
        self.universe.is_empty()
    }
}

/// Builds the package graph for one source tree
pub struct GraphBuilder<E = LexicalImportExtractor> {
    scanner: SourceScanner,
    namer: PackageNamer,
    extractor: E,
}

impl GraphBuilder<LexicalImportExtractor> {
    /// Prepare a builder for `root`, reading the module prefix up front
    pub fn new(root: &Path) -> Result<Self, GraphError> {
        if !root.is_dir() {
            return Err(GraphError::InvalidRoot {
                path: root.to_path_buf(),
            });
        }

        let prefix = ModulePrefix::from_root(root)?;
        debug!("Module prefix: {}", prefix);
        Ok(Self::with_prefix(root, prefix))
    }

    /// Prepare a builder with a known prefix (no manifest lookup)
    pub fn with_prefix(root: &Path, prefix: ModulePrefix) -> Self {
        Self {
            scanner: SourceScanner::new(root),
            namer: PackageNamer::new(root, prefix),
            extractor: LexicalImportExtractor::new(),
        }
    }
}

impl<E: ImportExtractor> GraphBuilder<E> {
    /// Swap the import extraction strategy
    pub fn with_extractor<F: ImportExtractor>(self, extractor: F) -> GraphBuilder<F> {
        GraphBuilder {
            scanner: self.scanner,
            namer: self.namer,
            extractor,
        }
    }

    pub fn module_prefix(&self) -> &ModulePrefix {
        self.namer.prefix()
    }

    /// Scan the tree and assemble the graph
    ///
    /// Definitions are collected for every readable file before any edge is
    /// added. Unreadable files contribute nothing and are listed in
    /// [`GraphBuild::read_failures`].
    pub fn build(&self) -> GraphBuild {
        let sources = self.scanner.scan();
        debug!(files = sources.len(), "Scanned source tree");

        let mut universe = PackageUniverse::new();
        let mut files = PackageFileIndex::new();
        let mut read_failures = Vec::new();
        let mut parsed: Vec<(PackageId, BTreeSet<String>)> = Vec::with_capacity(sources.len());

        // Definition pass
        for path in sources {
            let text = match SourceScanner::read_source(&path) {
                Ok(text) => text,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable source file");
                    read_failures.push(FileReadFailure {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let package = self.namer.package_for(&path);
            let imports = self.extractor.extract(&text);
            trace!(
                package = %package,
                imports = imports.len(),
                "Parsed {}",
                path.display()
            );

            universe.insert_local(&package);
            files.add(&package, path);
            parsed.push((package, imports));
        }

        // Edge pass
        let mut graph = DependencyGraph::new();
        let mut in_degree = InDegree::new();
        for (current, imports) in &parsed {
            graph.add_node(current);
            for import in imports {
                universe.insert_referenced(import);
                if graph.add_edge(import, current) {
                    in_degree.increment(current);
                }
            }
        }

        for id in universe.iter() {
            graph.add_node(id);
            in_degree.ensure(id);
        }

        debug!(
            packages = universe.len(),
            local = universe.local().len(),
            edges = graph.edge_count(),
            "Built dependency graph"
        );

        GraphBuild {
            graph,
            in_degree,
            universe,
            files,
            module_prefix: self.namer.prefix().clone(),
            read_failures,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("graph.test.rs");
}

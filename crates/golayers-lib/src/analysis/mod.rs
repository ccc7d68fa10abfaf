//! # Analysis Module
//!
//! Package dependency discovery and ordering for a Go source tree.
//!
//! ## Modules
//!
//! - [`manifest`] - Module prefix from `go.mod`
//! - [`scanner`] - Source file discovery
//! - [`imports`] - Lexical import extraction
//! - [`naming`] - Directory to package identifier mapping
//! - [`graph`] - Dependency graph construction
//! - [`cycles`] - Cycle detection and diagnostics
//! - [`layers`] - Layered topological ordering

pub mod cycles;
pub mod graph;
pub mod imports;
pub mod layers;
pub mod manifest;
pub mod naming;
pub mod scanner;

pub use cycles::CycleDetector;
pub use graph::{
    DependencyGraph, FileReadFailure, GraphBuild, GraphBuilder, GraphError, InDegree,
    PackageFileIndex, PackageId, PackageUniverse,
};
pub use imports::{ImportExtractor, LexicalImportExtractor};
pub use layers::{Layer, LayeredTopologicalSorter, SortError};
pub use manifest::{ManifestError, ModulePrefix};
pub use naming::PackageNamer;
pub use scanner::SourceScanner;

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that stop an analysis run
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Sort(#[from] SortError),
}

/// What an analysis run concluded
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// No package was defined or imported anywhere
    Empty(GraphBuild),
    /// The graph has cycles; no ordering was attempted
    Cyclic {
        build: GraphBuild,
        cycles: Vec<Vec<PackageId>>,
    },
    /// The graph is acyclic and was layered
    Ordered { build: GraphBuild, layers: Vec<Layer> },
}

impl AnalysisOutcome {
    pub fn build(&self) -> &GraphBuild {
        match self {
            Self::Empty(build) => build,
            Self::Cyclic { build, .. } | Self::Ordered { build, .. } => build,
        }
    }

    /// Serializable summary of the run
    pub fn report(&self) -> AnalysisReport {
        let build = self.build();
        let (status, layers, cycles) = match self {
            Self::Empty(_) => (OutcomeStatus::Empty, Vec::new(), Vec::new()),
            Self::Cyclic { cycles, .. } => (OutcomeStatus::Cyclic, Vec::new(), cycles.clone()),
            Self::Ordered { layers, .. } => (OutcomeStatus::Ordered, layers.clone(), Vec::new()),
        };

        AnalysisReport {
            module_prefix: build.module_prefix.to_string(),
            status,
            local_packages: build.local_packages().clone(),
            external_packages: build.external_packages(),
            edge_count: build.graph.edge_count(),
            layers,
            cycles,
            read_failures: build.read_failures.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Empty,
    Cyclic,
    Ordered,
}

/// Machine-readable result of one analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub module_prefix: String,
    pub status: OutcomeStatus,
    pub local_packages: BTreeSet<PackageId>,
    pub external_packages: BTreeSet<PackageId>,
    pub edge_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<Layer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cycles: Vec<Vec<PackageId>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub read_failures: Vec<FileReadFailure>,
}

/// Run the whole pipeline: build, gate on cycles, then layer
pub fn analyze(root: &Path) -> Result<AnalysisOutcome, AnalysisError> {
    let builder = GraphBuilder::new(root)?;
    analyze_with(&builder)
}

/// Run the pipeline with a prepared builder
pub fn analyze_with<E: ImportExtractor>(
    builder: &GraphBuilder<E>,
) -> Result<AnalysisOutcome, AnalysisError> {
    let build = builder.build();

    if build.is_empty() {
        info!("No packages found under module {}", build.module_prefix);
        return Ok(AnalysisOutcome::Empty(build));
    }

    if CycleDetector::is_cyclic(&build.graph) {
        let cycles = CycleDetector::find_cycles(&build.graph);
        info!(groups = cycles.len(), "Dependency cycle detected");
        return Ok(AnalysisOutcome::Cyclic { build, cycles });
    }

    debug!("Graph is acyclic, computing layers");
    let layers = LayeredTopologicalSorter::sort_layers(&build.graph, build.in_degree.clone())?;
    Ok(AnalysisOutcome::Ordered { build, layers })
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}

//! Layered topological ordering (generation-based Kahn's algorithm)
//!
//! Layer 0 holds every package with nothing to wait on. Each following
//! layer holds the packages whose last outstanding dependency was placed in
//! the previous one. Only call this on graphs that
//! [`CycleDetector::is_cyclic`](super::cycles::CycleDetector::is_cyclic)
//! reported as acyclic.

use super::graph::{DependencyGraph, InDegree, PackageId};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, trace};

/// Packages that share a depth; sorted lexicographically
pub type Layer = Vec<PackageId>;

/// Internal-consistency failure of the layered sort
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("Layered sort left {} package(s) undrained: {}", .remaining.len(), .remaining.join(", "))]
    Incomplete { remaining: Vec<PackageId> },
}

/// Produces the ordered sequence of independent-node layers
#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredTopologicalSorter;

impl LayeredTopologicalSorter {
    /// Sort `graph` into layers, consuming `in_degree`
    ///
    /// The table is taken by value because the counts are drained as the
    /// sort runs; build a fresh one with [`DependencyGraph::in_degrees`] (or
    /// clone the builder's) for each attempt.
    pub fn sort_layers(
        graph: &DependencyGraph,
        mut in_degree: InDegree,
    ) -> Result<Vec<Layer>, SortError> {
        for node in graph.nodes() {
            in_degree.ensure(node);
        }
        let total = in_degree.len();

        let mut layers: Vec<Layer> = Vec::new();
        let mut current: Layer = in_degree.zero_nodes().map(str::to_string).collect();

        while !current.is_empty() {
            current.sort_unstable();
            trace!(layer = layers.len(), size = current.len(), "Emitting layer");

            let mut next: BTreeSet<PackageId> = BTreeSet::new();
            for node in &current {
                for dependent in graph.dependents(node) {
                    // Already placed, or the table was consumed by an earlier sort
                    if in_degree.get(dependent) == 0 {
                        continue;
                    }
                    if in_degree.decrement(dependent) == 0 {
                        next.insert(dependent.to_string());
                    }
                }
            }

            layers.push(current);
            current = next.into_iter().collect();
        }

        let emitted: usize = layers.iter().map(Vec::len).sum();
        if emitted < total {
            let remaining: Vec<PackageId> = in_degree.pending().map(str::to_string).collect();
            return Err(SortError::Incomplete { remaining });
        }

        debug!(layers = layers.len(), packages = emitted, "Layered sort complete");
        Ok(layers)
    }

    /// Flat total order derived from a layer sequence
    pub fn flatten(layers: &[Layer]) -> Vec<PackageId> {
        layers.iter().flatten().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    include!("layers.test.rs");
}

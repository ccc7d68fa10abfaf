//! Cycle detection over the package graph
//!
//! [`CycleDetector::is_cyclic`] is the gate in front of the layered sort.
//! [`CycleDetector::find_cycles`] is diagnostic only: it names the packages
//! that take part in cycles so the user has somewhere to start looking.

use super::graph::{DependencyGraph, PackageId};
use petgraph::algo::tarjan_scc;
use std::collections::HashMap;

/// DFS colour of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current recursion stack
    InProgress,
    Done,
}

/// Traversal state owned by a single detection call
struct DfsContext<'g> {
    graph: &'g DependencyGraph,
    marks: HashMap<&'g str, Mark>,
}

impl<'g> DfsContext<'g> {
    fn new(graph: &'g DependencyGraph) -> Self {
        Self {
            graph,
            marks: HashMap::with_capacity(graph.node_count()),
        }
    }

    /// Iterative three-colour DFS from `start`; true if a back edge is found
    fn visit(&mut self, start: &'g str) -> bool {
        let graph = self.graph;
        let mut stack: Vec<(&'g str, Vec<&'g str>)> = Vec::new();

        self.marks.insert(start, Mark::InProgress);
        stack.push((start, graph.dependents(start).collect()));

        while let Some((node, pending)) = stack.last_mut() {
            let Some(next) = pending.pop() else {
                self.marks.insert(*node, Mark::Done);
                stack.pop();
                continue;
            };

            match self.marks.get(next).copied() {
                Some(Mark::InProgress) => return true,
                Some(Mark::Done) => {}
                None => {
                    self.marks.insert(next, Mark::InProgress);
                    stack.push((next, graph.dependents(next).collect()));
                }
            }
        }

        false
    }
}

/// Decides whether a dependency graph is acyclic
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleDetector;

impl CycleDetector {
    /// True when the graph contains at least one directed cycle
    ///
    /// Top-level nodes are visited in lexicographic order; the verdict does
    /// not depend on that order. Runs in O(V + E).
    pub fn is_cyclic(graph: &DependencyGraph) -> bool {
        let mut ctx = DfsContext::new(graph);

        for node in graph.nodes() {
            if !ctx.marks.contains_key(node) && ctx.visit(node) {
                return true;
            }
        }

        false
    }

    /// Groups of packages that depend on each other in a cycle
    ///
    /// Each group is a strongly connected component with more than one
    /// member, sorted; the groups themselves are sorted too. Self-loops are
    /// impossible in a [`DependencyGraph`], so single nodes never appear.
    pub fn find_cycles(graph: &DependencyGraph) -> Vec<Vec<PackageId>> {
        let pg = graph.to_petgraph();

        let mut cycles: Vec<Vec<PackageId>> = tarjan_scc(&pg)
            .into_iter()
            .filter(|component| component.len() > 1)
            .map(|component| {
                let mut ids: Vec<PackageId> =
                    component.into_iter().map(|idx| pg[idx].clone()).collect();
                ids.sort_unstable();
                ids
            })
            .collect();

        cycles.sort_unstable();
        cycles
    }
}

#[cfg(test)]
mod tests {
    include!("cycles.test.rs");
}

//! # Render Module
//!
//! Turns an ordered package graph into a viewable artifact.
//!
//! - [`dot`] - Graphviz DOT text with one rank per layer
//! - [`html`] - HTML page wrapping the Graphviz SVG (or the DOT source)
//! - [`viewer`] - Platform viewer launch

pub mod dot;
pub mod html;
pub mod viewer;

pub use dot::to_dot;
pub use html::{HtmlRenderer, RenderedGraph};
pub use viewer::open_in_viewer;

use crate::analysis::{DependencyGraph, GraphBuild, Layer, ModulePrefix, PackageUniverse};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template rendering error: {message}")]
    Template { message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Read-only view of an ordered graph
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub module_prefix: &'a ModulePrefix,
    pub graph: &'a DependencyGraph,
    pub universe: &'a PackageUniverse,
    pub layers: &'a [Layer],
}

impl<'a> RenderInput<'a> {
    pub fn new(build: &'a GraphBuild, layers: &'a [Layer]) -> Self {
        Self {
            module_prefix: &build.module_prefix,
            graph: &build.graph,
            universe: &build.universe,
            layers,
        }
    }

    /// File name stem shared by the artifacts of one module
    pub fn artifact_stem(&self) -> String {
        self.module_prefix.as_str().replace('/', "_")
    }
}

/// Produces an artifact from an ordered graph
pub trait Renderer {
    fn render(&self, input: &RenderInput<'_>) -> Result<RenderedGraph, RenderError>;
}

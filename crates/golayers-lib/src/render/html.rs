use super::{RenderError, RenderInput, Renderer, dot};
use crate::application::session::{FileSystemProvider, GRAPHVIZ_DOT, ProcessProvider};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const TEMPLATE_NAME: &str = "graph.html";

/// Paths of the written artifacts
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedGraph {
    pub html_path: PathBuf,
    pub dot_path: PathBuf,
    /// Whether Graphviz produced the embedded SVG
    pub svg: bool,
}

#[derive(Serialize)]
struct PackageView<'a> {
    name: &'a str,
    external: bool,
}

#[derive(Serialize)]
struct PageData<'a> {
    title: &'a str,
    local_count: usize,
    external_count: usize,
    layer_count: usize,
    layers: Vec<Vec<PackageView<'a>>>,
    svg: Option<String>,
    dot: &'a str,
}

/// Keep only the `<svg>` element of Graphviz output
pub fn extract_svg(output: &str) -> Option<String> {
    output
        .find("<svg")
        .map(|start| output[start..].trim_end().to_string())
}

/// Writes `<stem>.dot` and `<stem>.html` into an output directory
pub struct HtmlRenderer<'s> {
    filesystem: &'s dyn FileSystemProvider,
    process: &'s dyn ProcessProvider,
    output_dir: PathBuf,
    handlebars: Handlebars<'static>,
}

impl<'s> HtmlRenderer<'s> {
    pub fn new(
        filesystem: &'s dyn FileSystemProvider,
        process: &'s dyn ProcessProvider,
        output_dir: PathBuf,
    ) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(|text| html_escape::encode_quoted_attribute(text).into_owned());
        handlebars
            .register_template_string(
                TEMPLATE_NAME,
                include_str!("../../templates/graph.html.hbs"),
            )
            .map_err(|e| RenderError::Template {
                message: e.to_string(),
            })?;

        Ok(Self {
            filesystem,
            process,
            output_dir,
            handlebars,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Run `dot -Tsvg` on the written DOT file
    fn layout_svg(&self, dot_path: &Path) -> Option<String> {
        match self.process.check_graphviz() {
            Ok((true, version)) => debug!(version = %version, "Using Graphviz"),
            _ => {
                warn!("Graphviz not found, embedding DOT source instead of SVG");
                return None;
            }
        }

        let dot_arg = dot_path.to_string_lossy();
        match self
            .process
            .execute(GRAPHVIZ_DOT, &["-Tsvg", dot_arg.as_ref()], &self.output_dir)
        {
            Ok(output) if output.success => extract_svg(&output.stdout),
            Ok(output) => {
                warn!(stderr = output.stderr.trim(), "Graphviz layout failed");
                None
            }
            Err(e) => {
                warn!("Could not run Graphviz: {}", e);
                None
            }
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), RenderError> {
        self.filesystem
            .write_file(path, content)
            .map_err(|e| RenderError::Write {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

impl Renderer for HtmlRenderer<'_> {
    fn render(&self, input: &RenderInput<'_>) -> Result<RenderedGraph, RenderError> {
        self.filesystem
            .create_dir_all(&self.output_dir)
            .map_err(|e| RenderError::Write {
                path: self.output_dir.clone(),
                message: e.to_string(),
            })?;

        let stem = input.artifact_stem();
        let dot_source = dot::to_dot(input);
        let dot_path = self.output_dir.join(format!("{stem}.dot"));
        self.write(&dot_path, &dot_source)?;

        let svg = self.layout_svg(&dot_path);
        let rendered_svg = svg.is_some();

        let page = PageData {
            title: input.module_prefix.as_str(),
            local_count: input.universe.local().len(),
            external_count: input.universe.len() - input.universe.local().len(),
            layer_count: input.layers.len(),
            layers: input
                .layers
                .iter()
                .map(|layer| {
                    layer
                        .iter()
                        .map(|id| PackageView {
                            name: id,
                            external: input.universe.is_external(id),
                        })
                        .collect()
                })
                .collect(),
            svg,
            dot: &dot_source,
        };

        let html = self
            .handlebars
            .render(TEMPLATE_NAME, &page)
            .map_err(|e| RenderError::Template {
                message: format!("Failed to render template '{}': {}", TEMPLATE_NAME, e),
            })?;

        let html_path = self.output_dir.join(format!("{stem}.html"));
        self.write(&html_path, &html)?;
        info!(path = %html_path.display(), svg = rendered_svg, "Wrote dependency graph");

        Ok(RenderedGraph {
            html_path,
            dot_path,
            svg: rendered_svg,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("html.test.rs");
}

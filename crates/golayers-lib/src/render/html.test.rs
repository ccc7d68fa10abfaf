use super::*;
use crate::analysis::{DependencyGraph, ModulePrefix, PackageUniverse};
use crate::application::session::ProcessOutput;
use crate::application::session_mocks::{MockFileSystemProvider, MockProcessProvider};

struct Fixture {
    prefix: ModulePrefix,
    graph: DependencyGraph,
    universe: PackageUniverse,
    layers: Vec<Vec<String>>,
}

impl Fixture {
    fn new() -> Self {
        let mut graph = DependencyGraph::new();
        let mut universe = PackageUniverse::new();
        graph.add_node("fmt");
        graph.add_node("example.com/app/core");
        graph.add_edge("fmt", "example.com/app/core");
        universe.insert_referenced("fmt");
        universe.insert_local("example.com/app/core");

        Self {
            prefix: ModulePrefix::new("example.com/app"),
            graph,
            universe,
            layers: vec![
                vec!["fmt".to_string()],
                vec!["example.com/app/core".to_string()],
            ],
        }
    }

    fn input(&self) -> RenderInput<'_> {
        RenderInput {
            module_prefix: &self.prefix,
            graph: &self.graph,
            universe: &self.universe,
            layers: &self.layers,
        }
    }
}

fn out_dir() -> PathBuf {
    PathBuf::from("/test/out")
}

#[test]
fn test_extract_svg_strips_prolog() {
    let output = "<?xml version=\"1.0\"?>\n<!DOCTYPE svg>\n<svg width=\"1\"></svg>\n";
    assert_eq!(extract_svg(output), Some("<svg width=\"1\"></svg>".to_string()));
    assert_eq!(extract_svg("not svg"), None);
}

#[test]
fn test_render_embeds_graphviz_svg() {
    let fixture = Fixture::new();
    let filesystem = MockFileSystemProvider::new();
    let process = MockProcessProvider::new().with_stdout(
        GRAPHVIZ_DOT,
        "<?xml version=\"1.0\"?>\n<svg id=\"layers\"><g/></svg>\n",
    );

    let renderer = HtmlRenderer::new(&filesystem, &process, out_dir()).unwrap();
    let rendered = renderer.render(&fixture.input()).unwrap();

    assert_eq!(rendered.html_path, PathBuf::from("/test/out/example.com_app.html"));
    assert_eq!(rendered.dot_path, PathBuf::from("/test/out/example.com_app.dot"));
    assert!(rendered.svg);

    let html = filesystem.written(&rendered.html_path).unwrap();
    assert!(html.contains("<svg id=\"layers\"><g/></svg>"));
    assert!(!html.contains("<?xml"));
    assert!(html.contains("<title>example.com/app dependency layers</title>"));
    assert!(html.contains("1 local and 1 external packages in 2 layers."));
    assert!(html.contains("<code class=\"external\">fmt</code>"));
    assert!(html.contains("<code class=\"local\">example.com/app/core</code>"));

    let calls = process.get_calls_for_command(GRAPHVIZ_DOT);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].args, vec!["-Tsvg", "/test/out/example.com_app.dot"]);
    assert_eq!(calls[0].working_dir, out_dir());
}

#[test]
fn test_render_falls_back_to_escaped_dot() {
    let fixture = Fixture::new();
    let filesystem = MockFileSystemProvider::new();
    let process = MockProcessProvider::new().with_graphviz_unavailable();

    let renderer = HtmlRenderer::new(&filesystem, &process, out_dir()).unwrap();
    let rendered = renderer.render(&fixture.input()).unwrap();

    assert!(!rendered.svg);
    assert!(process.get_calls().is_empty());

    let html = filesystem.written(&rendered.html_path).unwrap();
    assert!(html.contains("class=\"hint\""));
    assert!(html.contains("&quot;fmt&quot; -&gt; &quot;example.com/app/core&quot;;"));
    assert!(!html.contains("<svg"));

    let dot = filesystem.written(&rendered.dot_path).unwrap();
    assert!(dot.contains("\"fmt\" -> \"example.com/app/core\";"));
}

#[test]
fn test_render_falls_back_when_graphviz_fails() {
    let fixture = Fixture::new();
    let filesystem = MockFileSystemProvider::new();
    let process = MockProcessProvider::new().with_result(
        GRAPHVIZ_DOT,
        Ok(ProcessOutput {
            stdout: String::new(),
            stderr: "Error: syntax error".to_string(),
            success: false,
        }),
    );

    let renderer = HtmlRenderer::new(&filesystem, &process, out_dir()).unwrap();
    let rendered = renderer.render(&fixture.input()).unwrap();

    assert!(!rendered.svg);
    assert!(filesystem.written(&rendered.html_path).unwrap().contains("<pre>"));
}

#[test]
fn test_render_reports_write_failure() {
    let fixture = Fixture::new();
    let filesystem = MockFileSystemProvider::new()
        .with_failing_write(PathBuf::from("/test/out/example.com_app.html"));
    let process = MockProcessProvider::new().with_graphviz_unavailable();

    let renderer = HtmlRenderer::new(&filesystem, &process, out_dir()).unwrap();
    let err = renderer.render(&fixture.input()).unwrap_err();

    assert!(matches!(err, RenderError::Write { ref path, .. } if path.ends_with("example.com_app.html")));
}

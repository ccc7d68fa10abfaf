//! Command execution handlers
//!
//! Session-based command execution: every handler receives a `&dyn Session`
//! and performs all user interaction and side effects through its providers.

use crate::analysis::{
    self, AnalysisOutcome, CycleDetector, GraphBuild, GraphBuilder, Layer,
    LayeredTopologicalSorter, PackageId,
};
use crate::application::cli::AnalyzeArgs;
use crate::application::session::{CommandSession, Session};
use crate::application::{CliConfig, Commands};
use crate::display::DisplayProviderExt;
use crate::render::{HtmlRenderer, RenderInput, Renderer, open_in_viewer};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Execute CLI commands using the session-based architecture
pub fn execute_command(config: CliConfig) -> Result<()> {
    // Create command session (owns all ephemeral state)
    let session = CommandSession::new(config.app_config);

    // Bare `golayers` runs the interactive analyze flow
    let command = config
        .command
        .unwrap_or_else(|| Commands::Analyze(AnalyzeArgs::default()));

    execute_command_with_session(command, &session)
}

/// Execute a specific command with a provided session (for testing)
pub fn execute_command_with_session(command: Commands, session: &dyn Session) -> Result<()> {
    match command {
        Commands::Analyze(args) => handle_analyze(session, args),
        Commands::Cycles { dir } => handle_cycles(session, dir),
        Commands::Version => handle_version(session),
    }
}

/// Module root from the argument or a prompt; `None` when it is not a directory
fn resolve_source_root(session: &dyn Session, dir: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let workdir = session.workdir()?;

    let dir = match dir {
        Some(dir) => dir,
        None => {
            let answer = session
                .interactive()
                .text_input("Go module root directory", workdir.display().to_string())?;
            PathBuf::from(answer.trim())
        }
    };

    let root = session.resolve_path(dir)?;
    if !session.filesystem().is_directory(&root) {
        session
            .display()
            .status()
            .error("Invalid directory", &root.display().to_string());
        return Ok(None);
    }

    tracing::debug!(root = %root.display(), "Resolved module root");
    Ok(Some(root))
}

fn run_analysis(session: &dyn Session, root: &Path) -> Result<AnalysisOutcome> {
    let spinner = session
        .display()
        .progress()
        .spinner(&format!("Scanning {}", root.display()));

    match analysis::analyze(root) {
        Ok(outcome) => {
            spinner.finish_clear();
            Ok(outcome)
        }
        Err(e) => {
            spinner.abandon("Analysis failed");
            Err(e).with_context(|| format!("Failed to analyze {}", root.display()))
        }
    }
}

fn report_empty_module(session: &dyn Session, build: &GraphBuild) {
    session.display().status().info(&format!(
        "No Go packages found in module {}",
        build.module_prefix
    ));
}

fn report_read_failures(session: &dyn Session, build: &GraphBuild) {
    for failure in &build.read_failures {
        session.display().status().warning(&format!(
            "Skipped {}: {}",
            failure.path.display(),
            failure.reason
        ));
    }
}

fn show_package_summary(session: &dyn Session, build: &GraphBuild) {
    let local: Vec<&str> = build.local_packages().iter().map(String::as_str).collect();
    let external = build.external_packages();
    let external: Vec<&str> = external.iter().map(String::as_str).collect();

    session.display().display_group("Local packages", &local);
    session.display().display_group("External packages", &external);
}

fn show_cycles(session: &dyn Session, cycles: &[Vec<PackageId>]) {
    let status = session.display().status();
    status.error(
        "Dependency cycle detected",
        &format!("{} group(s) of mutually dependent packages", cycles.len()),
    );
    for (index, members) in cycles.iter().enumerate() {
        status.message(&format!("Cycle {}:", index + 1));
        let members: Vec<&str> = members.iter().map(String::as_str).collect();
        status.list(&members);
    }
    status.subtle("Layers can only be computed for an acyclic graph");
}

fn show_layers(session: &dyn Session, layers: &[Layer], flat: bool) {
    if flat {
        let order = LayeredTopologicalSorter::flatten(layers);
        let order: Vec<&str> = order.iter().map(String::as_str).collect();
        session.display().display_group("Build order", &order);
        return;
    }

    session
        .display()
        .status()
        .section(&format!("Dependency layers ({})", layers.len()));

    let rows: Vec<(String, String)> = layers
        .iter()
        .enumerate()
        .map(|(index, layer)| (index.to_string(), layer.join(", ")))
        .collect();
    let rows: Vec<Vec<&str>> = rows
        .iter()
        .map(|(index, packages)| vec![index.as_str(), packages.as_str()])
        .collect();

    session.display().table().table(&["Layer", "Packages"], &rows);
}

fn render_graph(
    session: &dyn Session,
    build: &GraphBuild,
    layers: &[Layer],
    args: &AnalyzeArgs,
) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => session.resolve_path(dir.clone())?,
        None => session.workdir()?,
    };

    let renderer = HtmlRenderer::new(session.filesystem(), session.process(), output_dir)?;
    let rendered = renderer
        .render(&RenderInput::new(build, layers))
        .context("Failed to render dependency graph")?;

    let html_path = rendered.html_path.display().to_string();
    if rendered.svg {
        session.display().status().success("Graph written", &html_path);
    } else {
        session.display().status().warning(&format!(
            "Graphviz unavailable, wrote DOT source to {}",
            html_path
        ));
    }

    if !args.no_open && !open_in_viewer(session.process(), &rendered.html_path) {
        session
            .display()
            .status()
            .warning(&format!("Could not open a viewer, open {} manually", html_path));
    }

    Ok(())
}

fn handle_analyze(session: &dyn Session, args: AnalyzeArgs) -> Result<()> {
    let Some(root) = resolve_source_root(session, args.dir.clone())? else {
        return Ok(());
    };

    let outcome = run_analysis(session, &root)?;
    report_read_failures(session, outcome.build());

    if args.json {
        let report = serde_json::to_string_pretty(&outcome.report())
            .context("Failed to serialize analysis report")?;
        session.display().status().message(&report);
        return Ok(());
    }

    match outcome {
        AnalysisOutcome::Empty(build) => {
            report_empty_module(session, &build);
            Ok(())
        }
        AnalysisOutcome::Cyclic { build, cycles } => {
            show_package_summary(session, &build);
            show_cycles(session, &cycles);
            Ok(())
        }
        AnalysisOutcome::Ordered { build, layers } => {
            show_package_summary(session, &build);
            show_layers(session, &layers, args.flat);

            if args.no_render {
                return Ok(());
            }
            render_graph(session, &build, &layers, &args)
        }
    }
}

fn handle_cycles(session: &dyn Session, dir: Option<PathBuf>) -> Result<()> {
    let Some(root) = resolve_source_root(session, dir)? else {
        return Ok(());
    };

    let builder = GraphBuilder::new(&root)
        .with_context(|| format!("Failed to analyze {}", root.display()))?;
    let build = builder.build();
    report_read_failures(session, &build);

    if build.is_empty() {
        report_empty_module(session, &build);
    } else if CycleDetector::is_cyclic(&build.graph) {
        show_cycles(session, &CycleDetector::find_cycles(&build.graph));
    } else {
        session.display().status().success(
            "No dependency cycles",
            &format!(
                "{} packages, {} imports",
                build.graph.node_count(),
                build.graph.edge_count()
            ),
        );
    }

    Ok(())
}

fn handle_version(session: &dyn Session) -> Result<()> {
    session
        .display()
        .status()
        .emphasis(&format!("golayers {}", env!("CARGO_PKG_VERSION")));
    session
        .display()
        .status()
        .message("Orders the packages of a Go module into dependency layers");
    session.display().status().message("");

    let build_info = [
        (
            "Built from commit",
            option_env!("GIT_HASH").unwrap_or("unknown"),
        ),
        ("Target", std::env::consts::ARCH),
    ];
    session.display().table().properties(&build_info);

    let (available, version) = session
        .process()
        .check_graphviz()
        .unwrap_or((false, String::new()));
    session
        .display()
        .status()
        .tool_check("Graphviz", available, &version);

    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}

//! Hermetic E2E tests using live providers and mock executables

#![cfg(unix)]

use anyhow::Result;
use golayers_lib::application::cli::{AnalyzeArgs, Commands};
use golayers_lib::application::commands::execute_command_with_session;
use golayers_lib::application::session::Session;
use golayers_tests::{GoTreeFixture, HermeticSessionBuilder, MockBehavior};

fn fixture() -> Result<GoTreeFixture> {
    GoTreeFixture::new("example.com/tool")?
        .with_package("lib", &["strings"])?
        .with_package("cmd/tool", &["example.com/tool/lib"])
}

#[test]
fn hermetic_analyze_renders_with_mock_graphviz() -> Result<()> {
    let (session, test_env) = HermeticSessionBuilder::new()?
        .with_mock_executable(
            "dot",
            MockBehavior::SucceedWithOutput {
                stdout: "<svg data-mock=\"dot\"></svg>".to_string(),
                stderr: "dot - graphviz version 9.0.0 (mock)".to_string(),
            },
        )?
        .with_mock_executable("xdg-open", MockBehavior::AlwaysSucceed)?
        .with_mock_executable("open", MockBehavior::AlwaysSucceed)?
        .build()?;
    let module = fixture()?;

    execute_command_with_session(
        Commands::Analyze(AnalyzeArgs {
            dir: Some(module.root().to_path_buf()),
            no_open: true,
            ..AnalyzeArgs::default()
        }),
        &session,
    )?;

    let html = std::fs::read_to_string(test_env.work_path.join("example.com_tool.html"))?;
    assert!(html.contains("<svg data-mock=\"dot\"></svg>"));
    assert!(test_env.work_path.join("example.com_tool.dot").exists());

    let calls = test_env.get_mock_calls("dot")?;
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], "-V");
    assert!(calls[1].starts_with("-Tsvg "));
    Ok(())
}

#[test]
fn hermetic_analyze_falls_back_when_graphviz_fails() -> Result<()> {
    let (session, test_env) = HermeticSessionBuilder::new()?
        .with_mock_executable(
            "dot",
            MockBehavior::AlwaysFail {
                error: "dot: cannot find fonts".to_string(),
            },
        )?
        .build()?;
    let module = fixture()?;

    execute_command_with_session(
        Commands::Analyze(AnalyzeArgs {
            dir: Some(module.root().to_path_buf()),
            no_open: true,
            ..AnalyzeArgs::default()
        }),
        &session,
    )?;

    let html = std::fs::read_to_string(test_env.work_path.join("example.com_tool.html"))?;
    assert!(html.contains("<pre>"));
    assert!(html.contains("&quot;example.com/tool/lib&quot; -&gt; &quot;example.com/tool/cmd/tool&quot;;"));
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn hermetic_analyze_opens_viewer() -> Result<()> {
    let (session, test_env) = HermeticSessionBuilder::new()?
        .with_mock_executable("dot", MockBehavior::AlwaysFail { error: "no".to_string() })?
        .with_mock_executable("xdg-open", MockBehavior::AlwaysSucceed)?
        .build()?;
    let module = fixture()?;

    execute_command_with_session(
        Commands::Analyze(AnalyzeArgs {
            dir: Some(module.root().to_path_buf()),
            ..AnalyzeArgs::default()
        }),
        &session,
    )?;

    let calls = test_env.get_mock_calls("xdg-open")?;
    assert_eq!(calls.len(), 1);
    assert!(calls[0].ends_with("example.com_tool.html"));
    Ok(())
}

#[test]
fn hermetic_session_reports_workdir() -> Result<()> {
    let (session, test_env) = HermeticSessionBuilder::new()?.build()?;
    assert_eq!(session.workdir()?, test_env.work_path);
    Ok(())
}

//! Command-level workflows driven through the mock session

use anyhow::Result;
use golayers_lib::application::cli::{AnalyzeArgs, Commands};
use golayers_lib::application::commands::execute_command_with_session;
use golayers_lib::application::config::AppConfig;
use golayers_lib::application::session_mocks::{
    MockCommandSession, MockConfigProvider, MockFileSystemProvider, MockInteractiveProvider,
    MockProcessProvider,
};
use golayers_lib::display::DisplayCall;
use golayers_tests::GoTreeFixture;

fn service_module() -> Result<GoTreeFixture> {
    GoTreeFixture::new("example.com/shop")?
        .with_package("model", &["time"])?
        .with_package("store", &["database/sql", "example.com/shop/model"])?
        .with_package("http", &["net/http", "example.com/shop/store"])?
        .with_package("", &["example.com/shop/http"])
}

fn session_for(fixture: &GoTreeFixture) -> MockCommandSession {
    MockCommandSession::new()
        .with_filesystem(MockFileSystemProvider::new().with_current_dir(fixture.root().to_path_buf()))
        .with_config(MockConfigProvider::new(AppConfig {
            workdir: Some(fixture.root().to_path_buf()),
            yes: true,
            ..AppConfig::default()
        }))
}

#[test]
fn analyze_renders_layered_graph() -> Result<()> {
    let fixture = service_module()?;
    let session = session_for(&fixture).with_process(
        MockProcessProvider::new().with_stdout("dot", "<?xml version=\"1.0\"?>\n<svg id=\"g\"></svg>"),
    );

    execute_command_with_session(
        Commands::Analyze(AnalyzeArgs {
            dir: Some(fixture.root().to_path_buf()),
            no_open: true,
            ..AnalyzeArgs::default()
        }),
        &session,
    )?;

    let table = session
        .display_mock()
        .get_calls()
        .into_iter()
        .find_map(|call| match call {
            DisplayCall::StructuredTable { rows, .. } => Some(rows),
            _ => None,
        })
        .expect("layers table");
    let packages: Vec<&str> = table.iter().map(|row| row[1].as_str()).collect();
    assert_eq!(
        packages,
        vec![
            "database/sql, net/http, time",
            "example.com/shop/model",
            "example.com/shop/store",
            "example.com/shop/http",
            "example.com/shop",
        ]
    );

    let html_path = fixture.root().join("example.com_shop.html");
    let html = session
        .filesystem_provider
        .written(&html_path)
        .expect("html artifact");
    assert!(html.contains("<svg id=\"g\"></svg>"));
    assert!(html.contains("<code class=\"external\">database/sql</code>"));

    let dot = session
        .filesystem_provider
        .written(&fixture.root().join("example.com_shop.dot"))
        .expect("dot artifact");
    assert!(dot.contains("\"example.com/shop/model\" -> \"example.com/shop/store\";"));
    Ok(())
}

#[test]
fn bare_invocation_prompts_for_root() -> Result<()> {
    let fixture = service_module()?;
    let session = session_for(&fixture)
        .with_interactive(MockInteractiveProvider::new().with_text_input("".to_string()));

    execute_command_with_session(
        Commands::Analyze(AnalyzeArgs {
            no_render: true,
            ..AnalyzeArgs::default()
        }),
        &session,
    )?;

    // An empty answer resolves to the working directory
    assert_eq!(session.interactive_provider.get_text_input_calls().len(), 1);
    assert_eq!(session.display_mock().count_calls("structured_table"), 1);
    Ok(())
}

#[test]
fn cycles_command_names_members() -> Result<()> {
    let fixture = GoTreeFixture::new("root")?
        .with_package("a", &["root/b"])?
        .with_package("b", &["root/c"])?
        .with_package("c", &["root/a"])?
        .with_package("d", &["root/a"])?;
    let session = session_for(&fixture);

    execute_command_with_session(
        Commands::Cycles {
            dir: Some(fixture.root().to_path_buf()),
        },
        &session,
    )?;

    assert!(session.display_mock().has_call(&DisplayCall::StatusList {
        items: vec![
            "root/a".to_string(),
            "root/b".to_string(),
            "root/c".to_string(),
        ],
    }));
    Ok(())
}

#[test]
fn unreadable_file_is_reported_and_skipped() -> Result<()> {
    let fixture = GoTreeFixture::new("root")?.with_package("a", &[])?;
    std::fs::write(fixture.root().join("a/bad.go"), [0xff, 0xfe, 0x00, 0x80])?;
    let session = session_for(&fixture);

    execute_command_with_session(
        Commands::Analyze(AnalyzeArgs {
            dir: Some(fixture.root().to_path_buf()),
            no_render: true,
            ..AnalyzeArgs::default()
        }),
        &session,
    )?;

    let transcript = session.display_mock().transcript();
    assert!(transcript.contains("bad.go"));
    assert_eq!(session.display_mock().count_calls("structured_table"), 1);
    Ok(())
}

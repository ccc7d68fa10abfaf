use super::*;
use crate::analysis::{AnalysisError, GraphError};
use crate::application::config::AppConfig;
use crate::application::session_mocks::*;
use crate::display::DisplayCall;
use std::fs;
use tempfile::TempDir;

fn go_module(prefix: &str, files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("go.mod"),
        format!("module {}\n\ngo 1.22\n", prefix),
    )
    .unwrap();
    for (relative, content) in files {
        let path = temp_dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp_dir
}

fn layered_module() -> TempDir {
    go_module(
        "example.com/app",
        &[
            ("core/core.go", "package core\n\nimport \"fmt\"\n"),
            (
                "api/api.go",
                "package api\n\nimport (\n\t\"example.com/app/core\"\n\t\"net/http\"\n)\n",
            ),
            ("cmd/main.go", "package main\n\nimport \"example.com/app/api\"\n"),
        ],
    )
}

fn cyclic_module() -> TempDir {
    go_module(
        "root",
        &[
            ("a/a.go", "package a\n\nimport \"root/b\"\n"),
            ("b/b.go", "package b\n\nimport \"root/a\"\n"),
        ],
    )
}

fn session_in(workdir: &Path) -> MockCommandSession {
    MockCommandSession::new()
        .with_filesystem(MockFileSystemProvider::new().with_current_dir(workdir.to_path_buf()))
        .with_process(MockProcessProvider::new().with_graphviz_unavailable())
}

fn analyze_args(dir: &Path) -> AnalyzeArgs {
    AnalyzeArgs {
        dir: Some(dir.to_path_buf()),
        ..AnalyzeArgs::default()
    }
}

mod handle_version_tests {
    use super::*;

    #[test]
    fn it_displays_version_and_graphviz() {
        let session = MockCommandSession::new();

        handle_version(&session).unwrap();

        let display = session.display_mock();
        assert!(
            display
                .transcript()
                .contains(&format!("golayers {}", env!("CARGO_PKG_VERSION")))
        );
        assert!(display.has_call(&DisplayCall::StatusToolCheck {
            tool: "Graphviz".to_string(),
            available: true,
            version: "dot - graphviz version 2.43.0 (0)".to_string(),
        }));
    }

    #[test]
    fn it_reports_missing_graphviz() {
        let session = MockCommandSession::new()
            .with_process(MockProcessProvider::new().with_graphviz_unavailable());

        handle_version(&session).unwrap();

        assert!(session.display_mock().has_call(&DisplayCall::StatusToolCheck {
            tool: "Graphviz".to_string(),
            available: false,
            version: String::new(),
        }));
    }
}

mod handle_analyze_tests {
    use super::*;

    #[test]
    fn it_prints_layers_for_acyclic_module() {
        let module = layered_module();
        let session = session_in(module.path());
        let args = AnalyzeArgs {
            no_render: true,
            ..analyze_args(module.path())
        };

        handle_analyze(&session, args).unwrap();

        let display = session.display_mock();
        assert!(display.has_call(&DisplayCall::StructuredTable {
            headers: vec!["Layer".to_string(), "Packages".to_string()],
            rows: vec![
                vec!["0".to_string(), "fmt, net/http".to_string()],
                vec!["1".to_string(), "example.com/app/core".to_string()],
                vec!["2".to_string(), "example.com/app/api".to_string()],
                vec!["3".to_string(), "example.com/app/cmd".to_string()],
            ],
        }));
        assert!(display.has_call(&DisplayCall::StatusSection {
            title: "Local packages (3)".to_string()
        }));
        assert!(display.has_call(&DisplayCall::StatusSection {
            title: "External packages (2)".to_string()
        }));
        assert!(session.filesystem_provider.written_paths().is_empty());
    }

    #[test]
    fn it_prints_flat_order() {
        let module = layered_module();
        let session = session_in(module.path());
        let args = AnalyzeArgs {
            no_render: true,
            flat: true,
            ..analyze_args(module.path())
        };

        handle_analyze(&session, args).unwrap();

        let display = session.display_mock();
        assert!(display.has_call(&DisplayCall::StatusSection {
            title: "Build order (5)".to_string()
        }));
        assert_eq!(display.count_calls("structured_table"), 0);
    }

    #[test]
    fn it_renders_and_opens_graph() {
        let module = layered_module();
        let out_dir = module.path().join("out");
        let session = MockCommandSession::new()
            .with_filesystem(
                MockFileSystemProvider::new().with_current_dir(module.path().to_path_buf()),
            )
            .with_process(MockProcessProvider::new().with_stdout("dot", "<svg></svg>"));
        let args = AnalyzeArgs {
            output_dir: Some(PathBuf::from("out")),
            ..analyze_args(module.path())
        };

        handle_analyze(&session, args).unwrap();

        let html_path = out_dir.join("example.com_app.html");
        let html = session.filesystem_provider.written(&html_path).unwrap();
        assert!(html.contains("<svg></svg>"));
        assert!(session.display_mock().has_call(&DisplayCall::StatusSuccess {
            item: "Graph written".to_string(),
            details: html_path.display().to_string(),
        }));

        // dot layout plus one viewer launch
        let calls = session.process_provider.get_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[1].args.last().map(String::as_str),
            Some(html_path.to_string_lossy().as_ref())
        );
    }

    #[test]
    fn it_skips_viewer_with_no_open() {
        let module = layered_module();
        let session = session_in(module.path());
        let args = AnalyzeArgs {
            no_open: true,
            ..analyze_args(module.path())
        };

        handle_analyze(&session, args).unwrap();

        assert!(session.process_provider.get_calls().is_empty());
        assert_eq!(session.filesystem_provider.written_paths().len(), 2);
        assert_eq!(session.display_mock().count_calls("status_warning"), 1);
    }

    #[test]
    fn it_reports_cycle_without_rendering() {
        let module = cyclic_module();
        let session = session_in(module.path());

        handle_analyze(&session, analyze_args(module.path())).unwrap();

        let display = session.display_mock();
        assert!(display.has_call(&DisplayCall::StatusList {
            items: vec!["root/a".to_string(), "root/b".to_string()],
        }));
        assert_eq!(display.count_calls("structured_table"), 0);
        assert!(session.filesystem_provider.written_paths().is_empty());
    }

    #[test]
    fn it_reports_empty_module() {
        let module = go_module("example.com/empty", &[("README.md", "docs\n")]);
        let session = session_in(module.path());

        handle_analyze(&session, analyze_args(module.path())).unwrap();

        assert!(session.display_mock().has_call(&DisplayCall::StatusInfo {
            message: "No Go packages found in module example.com/empty".to_string(),
        }));
    }

    #[test]
    fn it_rejects_invalid_directory() {
        let session = MockCommandSession::new();
        let missing = PathBuf::from("/definitely/not/a/golayers/dir");

        handle_analyze(&session, analyze_args(&missing)).unwrap();

        assert!(session.display_mock().has_call(&DisplayCall::StatusError {
            item: "Invalid directory".to_string(),
            details: missing.display().to_string(),
        }));
        assert_eq!(session.display_mock().count_calls("progress_spinner"), 0);
    }

    #[test]
    fn it_fails_without_go_mod() {
        let temp_dir = TempDir::new().unwrap();
        let session = session_in(temp_dir.path());

        let err = handle_analyze(&session, analyze_args(temp_dir.path())).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::Graph(GraphError::Manifest(_)))
        ));
        assert_eq!(session.display_mock().count_calls("progress_abandon"), 1);
    }

    #[test]
    fn it_prompts_for_directory() {
        let module = layered_module();
        let session = session_in(module.path()).with_interactive(
            MockInteractiveProvider::new().with_text_input(module.path().display().to_string()),
        );
        let args = AnalyzeArgs {
            no_render: true,
            ..AnalyzeArgs::default()
        };

        handle_analyze(&session, args).unwrap();

        let prompts = session.interactive_provider.get_text_input_calls();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].1, module.path().display().to_string());
        assert_eq!(session.display_mock().count_calls("structured_table"), 1);
    }

    #[test]
    fn it_resolves_relative_directory_against_workdir() {
        let module = layered_module();
        let session = MockCommandSession::new()
            .with_config(MockConfigProvider::new(AppConfig {
                workdir: Some(module.path().to_path_buf()),
                ..AppConfig::default()
            }));
        let args = AnalyzeArgs {
            dir: Some(PathBuf::from("core")),
            json: true,
            ..AnalyzeArgs::default()
        };

        // `core` alone has no go.mod
        assert!(handle_analyze(&session, args).is_err());
    }

    #[test]
    fn it_prints_json_report() {
        let module = layered_module();
        let session = session_in(module.path());
        let args = AnalyzeArgs {
            json: true,
            ..analyze_args(module.path())
        };

        handle_analyze(&session, args).unwrap();

        let messages: Vec<String> = session
            .display_mock()
            .get_calls()
            .into_iter()
            .filter_map(|call| match call {
                DisplayCall::StatusMessage { text } => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(messages.len(), 1);

        let report: serde_json::Value = serde_json::from_str(&messages[0]).unwrap();
        assert_eq!(report["module_prefix"], "example.com/app");
        assert_eq!(report["status"], "ordered");
        assert_eq!(report["layers"][3][0], "example.com/app/cmd");
        assert!(session.filesystem_provider.written_paths().is_empty());
    }
}

mod handle_cycles_tests {
    use super::*;

    #[test]
    fn it_lists_cycle_members() {
        let module = cyclic_module();
        let session = session_in(module.path());

        handle_cycles(&session, Some(module.path().to_path_buf())).unwrap();

        assert_eq!(session.display_mock().count_calls("status_error"), 1);
        assert!(session.display_mock().has_call(&DisplayCall::StatusList {
            items: vec!["root/a".to_string(), "root/b".to_string()],
        }));
    }

    #[test]
    fn it_confirms_acyclic_graph() {
        let module = layered_module();
        let session = session_in(module.path());

        handle_cycles(&session, Some(module.path().to_path_buf())).unwrap();

        assert!(session.display_mock().has_call(&DisplayCall::StatusSuccess {
            item: "No dependency cycles".to_string(),
            details: "5 packages, 4 imports".to_string(),
        }));
    }
}

mod handle_cycles_empty_tests {
    use super::*;

    #[test]
    fn it_reports_empty_module_instead_of_success() {
        let module = go_module("example.com/empty", &[("README.md", "docs\n")]);
        let session = session_in(module.path());

        handle_cycles(&session, Some(module.path().to_path_buf())).unwrap();

        let display = session.display_mock();
        assert!(display.has_call(&DisplayCall::StatusInfo {
            message: "No Go packages found in module example.com/empty".to_string(),
        }));
        assert_eq!(display.count_calls("status_success"), 0);
    }
}

mod dispatch_tests {
    use super::*;

    #[test]
    fn it_dispatches_version() {
        let session = MockCommandSession::new();

        execute_command_with_session(Commands::Version, &session).unwrap();

        assert_eq!(session.display_mock().count_calls("status_emphasis"), 1);
    }
}

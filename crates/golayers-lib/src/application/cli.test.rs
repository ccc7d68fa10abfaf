use super::*;
use crate::primitives::TerminalCapsDetectIntent;
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_command_parses() {
    let cli = Cli::try_parse_from(["golayers"]).unwrap();
    assert_eq!(cli.command, None);
}

#[test]
fn test_analyze_flags() {
    let cli = Cli::try_parse_from([
        "golayers",
        "analyze",
        "./svc",
        "--no-open",
        "--output-dir",
        "out",
        "--flat",
    ])
    .unwrap();

    let Some(Commands::Analyze(args)) = cli.command else {
        panic!("expected analyze command");
    };
    assert_eq!(args.dir, Some(PathBuf::from("./svc")));
    assert!(args.no_open);
    assert!(!args.no_render);
    assert!(!args.json);
    assert!(args.flat);
    assert_eq!(args.output_dir, Some(PathBuf::from("out")));
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from(["golayers", "cycles", "--color", "never", "-y"]).unwrap();

    assert_eq!(cli.config.color, TerminalCapsDetectIntent::Never);
    assert!(cli.config.yes);
    assert_eq!(cli.command, Some(Commands::Cycles { dir: None }));
}

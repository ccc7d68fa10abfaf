use golayers_lib::application::cli::{AnalyzeArgs, Cli, CliConfig, Commands};
use golayers_lib::application::config::AppConfig;
use golayers_lib::primitives::{ConfigError, LogFormat, TerminalCapsDetectIntent};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert!(config.workdir.is_none());
    assert_eq!(config.color, TerminalCapsDetectIntent::Auto);
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        log_format: LogFormat::Json,
        color: TerminalCapsDetectIntent::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.log_format, LogFormat::Json);
    assert_eq!(merged.color, TerminalCapsDetectIntent::Never);
    assert!(!merged.yes);
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "golayers",
        "analyze",
        "./svc",
        "--json",
        "--log-level",
        "2",
        "-c",
        "never",
    ])
    .unwrap();
    let config = CliConfig::from(cli);

    assert_eq!(config.app_config.log_level, 2);
    assert_eq!(config.app_config.color, TerminalCapsDetectIntent::Never);
    assert_eq!(
        config.command,
        Some(Commands::Analyze(AnalyzeArgs {
            dir: Some(PathBuf::from("./svc")),
            json: true,
            ..AnalyzeArgs::default()
        }))
    );
}

#[test]
fn test_finalize_rejects_invalid_log_level() {
    let cli = AppConfig {
        log_level: 5,
        ..AppConfig::default()
    };

    assert!(matches!(
        AppConfig::finalize(AppConfig::default(), cli),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

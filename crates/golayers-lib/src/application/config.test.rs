use super::*;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, TerminalCapsDetectIntent::Auto);
    assert!(!config.yes);
}

#[test]
fn test_defaults_match_clap_defaults() {
    let parsed = AppConfig::try_parse_from(["golayers"]).unwrap();
    let defaults = AppConfig::default();

    assert_eq!(parsed.log_level, defaults.log_level);
    assert_eq!(parsed.log_format, defaults.log_format);
    assert_eq!(parsed.color, defaults.color);
}

#[test]
fn test_config_merging_takes_non_defaults() {
    let base = AppConfig {
        log_level: 2,
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        color: TerminalCapsDetectIntent::Never,
        yes: true,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.log_level, 2);
    assert_eq!(merged.color, TerminalCapsDetectIntent::Never);
    assert!(merged.yes);
}

#[test]
fn test_validate_fills_workdir() {
    let mut config = AppConfig::default();
    config.validate().unwrap();
    assert!(config.workdir.is_some());
}

#[test]
fn test_validate_rejects_bad_log_level() {
    let mut config = AppConfig {
        log_level: 9,
        ..AppConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_validate_rejects_missing_workdir() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = AppConfig {
        workdir: Some(temp_dir.path().join("absent")),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWorkDir { .. })
    ));
}

use super::*;
use crate::primitives::TerminalCapsDetectIntent;

#[test]
fn test_finalize_prefers_cli_values() {
    let base = AppConfig {
        log_level: 1,
        ..AppConfig::default()
    };
    let cli = AppConfig {
        log_level: 3,
        color: TerminalCapsDetectIntent::Never,
        ..AppConfig::default()
    };

    let config = AppConfig::finalize(base, cli).unwrap();
    assert_eq!(config.log_level, 3);
    assert_eq!(config.color, TerminalCapsDetectIntent::Never);
    assert!(config.workdir.is_some());
}

#[test]
fn test_finalize_validates() {
    let cli = AppConfig {
        log_level: 7,
        ..AppConfig::default()
    };
    assert!(AppConfig::finalize(AppConfig::default(), cli).is_err());
}

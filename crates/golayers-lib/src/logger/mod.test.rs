use super::*;

#[test]
fn test_default_filter_targets_crate() {
    assert_eq!(Logger::default_filter(LogLevel::Error), "warn,golayers=error");
    assert_eq!(Logger::default_filter(LogLevel::Debug), "warn,golayers=debug");
}

#[test]
fn test_default_filter_parses() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        assert!(EnvFilter::try_new(Logger::default_filter(level)).is_ok());
    }
}

#[test]
fn test_global_is_consistent_with_initialized_flag() {
    // Other tests in the process may have installed the logger
    assert_eq!(Logger::is_initialized(), Logger::global().is_some());
}

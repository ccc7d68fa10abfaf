use super::*;

// =============================================================================
// VALUE ENUMS
// =============================================================================

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant
                    .to_possible_value()
                    .expect("PossibleValue should exist for all variants");

                let primary_name = possible_value.get_name();
                let parsed: $enum_type = primary_name
                    .parse()
                    .unwrap_or_else(|_| panic!("'{}' should parse", primary_name));
                assert_eq!(parsed, *variant, "Round-trip should preserve variant");
            }
        }
    };
}

macro_rules! test_fromstr_aliases {
    ($enum_type:ty, $test_name:ident, $expected_mappings:expr) => {
        #[test]
        fn $test_name() {
            let mappings: &[(&str, $enum_type)] = &$expected_mappings;

            for (input, expected) in mappings {
                let parsed: Result<$enum_type, _> = input.parse();
                assert_eq!(
                    parsed.ok(),
                    Some(*expected),
                    "Wrong variant for input '{}'",
                    input
                );
            }
        }
    };
}

test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(TerminalCapsDetectIntent, test_color_intent_completeness);

test_fromstr_aliases!(
    LogLevel,
    test_log_level_aliases,
    [
        ("error", LogLevel::Error),
        ("err", LogLevel::Error),
        ("warn", LogLevel::Warning),
        ("warning", LogLevel::Warning),
        ("info", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Trace),
        ("verbose", LogLevel::Trace),
    ]
);

test_fromstr_aliases!(
    LogFormat,
    test_log_format_aliases,
    [
        ("text", LogFormat::Text),
        ("plain", LogFormat::Text),
        ("json", LogFormat::Json),
        ("yml", LogFormat::Yaml),
        ("pretty", LogFormat::Yaml),
    ]
);

test_fromstr_aliases!(
    TerminalCapsDetectIntent,
    test_color_intent_aliases,
    [
        ("auto", TerminalCapsDetectIntent::Auto),
        ("detect", TerminalCapsDetectIntent::Auto),
        ("always", TerminalCapsDetectIntent::Always),
        ("ALWAYS", TerminalCapsDetectIntent::Always),
        ("on", TerminalCapsDetectIntent::Always),
        ("never", TerminalCapsDetectIntent::Never),
        ("off", TerminalCapsDetectIntent::Never),
    ]
);

#[test]
fn test_unknown_value_is_parse_error() {
    let err = "sometimes".parse::<TerminalCapsDetectIntent>().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { ref value, .. } if value == "sometimes"));
}

// =============================================================================
// BEHAVIOUR
// =============================================================================

#[test]
fn test_log_level_from_verbosity_saturates() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(u8::MAX), LogLevel::Trace);
}

#[test]
fn test_filter_directives() {
    assert_eq!(LogLevel::Warning.as_filter(), "warn");
    assert_eq!(LogLevel::Trace.as_filter(), "trace");
}

#[test]
fn test_color_caps_from_env_values() {
    assert_eq!(
        TerminalColorCaps::from_env_values(Some("xterm"), Some("truecolor")),
        TerminalColorCaps::TrueColor
    );
    assert_eq!(
        TerminalColorCaps::from_env_values(Some("xterm-256color"), None),
        TerminalColorCaps::Ansi256
    );
    assert_eq!(
        TerminalColorCaps::from_env_values(Some("xterm"), None),
        TerminalColorCaps::Ansi16
    );
    assert_eq!(
        TerminalColorCaps::from_env_values(Some("dumb"), None),
        TerminalColorCaps::None
    );
    assert!(!TerminalColorCaps::from_env_values(None, None).is_enabled());
}

#[test]
fn test_config_error_display() {
    let error = ConfigError::InvalidWorkDir {
        path: "/invalid/path".to_string(),
    };
    assert_eq!(error.to_string(), "Invalid working directory: /invalid/path");

    let error = ConfigError::ValidationFailed {
        reason: "log level out of range".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Configuration validation failed: log level out of range"
    );
}

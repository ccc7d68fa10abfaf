use super::*;

fn env(term: Option<&str>, colorterm: Option<&str>, lang: Option<&str>) -> TerminalEnvConfig {
    TerminalEnvConfig {
        term: term.map(str::to_string),
        colorterm: colorterm.map(str::to_string),
        lang: lang.map(str::to_string),
        lc_all: None,
    }
}

#[test]
fn test_auto_uses_detected_color_on_tty() {
    let caps = TerminalCapabilities::resolve(
        &env(Some("xterm-256color"), None, None),
        TerminalCapsDetectIntent::Auto,
        true,
    );
    assert_eq!(caps.color, TerminalColorCaps::Ansi256);
    assert!(caps.is_tty);
}

#[test]
fn test_auto_disables_color_when_piped() {
    let caps = TerminalCapabilities::resolve(
        &env(Some("xterm-256color"), Some("truecolor"), None),
        TerminalCapsDetectIntent::Auto,
        false,
    );
    assert_eq!(caps.color, TerminalColorCaps::None);
}

#[test]
fn test_always_forces_at_least_basic_color() {
    let caps = TerminalCapabilities::resolve(
        &env(Some("dumb"), None, None),
        TerminalCapsDetectIntent::Always,
        false,
    );
    assert_eq!(caps.color, TerminalColorCaps::Ansi16);

    let caps = TerminalCapabilities::resolve(
        &env(None, Some("24bit"), None),
        TerminalCapsDetectIntent::Always,
        false,
    );
    assert_eq!(caps.color, TerminalColorCaps::TrueColor);
}

#[test]
fn test_never_wins_over_detection() {
    let caps = TerminalCapabilities::resolve(
        &env(Some("xterm"), Some("truecolor"), None),
        TerminalCapsDetectIntent::Never,
        true,
    );
    assert_eq!(caps.color, TerminalColorCaps::None);
}

#[test]
fn test_unicode_from_locale() {
    let caps = TerminalCapabilities::resolve(
        &env(None, None, Some("en_US.UTF-8")),
        TerminalCapsDetectIntent::Never,
        false,
    );
    assert!(caps.unicode);

    let mut config = env(None, None, Some("en_US.UTF-8"));
    config.lc_all = Some("C".to_string());
    let caps = TerminalCapabilities::resolve(&config, TerminalCapsDetectIntent::Never, false);
    assert!(!caps.unicode);
}

#[test]
fn test_plain_capabilities() {
    let caps = TerminalCapabilities::plain();
    assert_eq!(caps.color, TerminalColorCaps::None);
    assert!(!caps.unicode && !caps.is_tty);
}

use super::*;

fn env(
    no_color: Option<&str>,
    force_color: Option<&str>,
    clicolor: Option<&str>,
    ci: Option<&str>,
) -> EnvironmentConfig {
    EnvironmentConfig {
        no_color: no_color.map(str::to_string),
        force_color: force_color.map(str::to_string),
        clicolor: clicolor.map(str::to_string),
        ci: ci.map(str::to_string),
    }
}

#[test]
fn test_no_color_disables() {
    let color = env(Some("1"), None, None, None).apply_color_config(TerminalCapsDetectIntent::Auto);
    assert_eq!(color, TerminalCapsDetectIntent::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let color = env(Some(""), None, None, None).apply_color_config(TerminalCapsDetectIntent::Auto);
    assert_eq!(color, TerminalCapsDetectIntent::Auto);
}

#[test]
fn test_force_color_overrides_no_color_and_clicolor() {
    let color = env(Some("1"), Some("1"), Some("0"), None)
        .apply_color_config(TerminalCapsDetectIntent::Auto);
    assert_eq!(color, TerminalCapsDetectIntent::Always);

    let color = env(None, Some("false"), None, None)
        .apply_color_config(TerminalCapsDetectIntent::Always);
    assert_eq!(color, TerminalCapsDetectIntent::Never);
}

#[test]
fn test_clicolor_zero_disables() {
    let color = env(None, None, Some("0"), None).apply_color_config(TerminalCapsDetectIntent::Auto);
    assert_eq!(color, TerminalCapsDetectIntent::Never);
}

#[test]
fn test_ci_wins_over_everything() {
    let config = env(None, Some("1"), None, Some("true"));
    assert!(config.is_ci());
    assert_eq!(
        config.apply_color_config(TerminalCapsDetectIntent::Always),
        TerminalCapsDetectIntent::Never
    );
}

#[test]
fn test_invalid_force_color_values_ignored() {
    let color = env(None, Some("maybe"), None, None)
        .apply_color_config(TerminalCapsDetectIntent::Auto);
    assert_eq!(color, TerminalCapsDetectIntent::Auto);
}

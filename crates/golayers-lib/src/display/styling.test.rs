use super::*;
use crate::display::test_utils::{create_test_capabilities, create_test_styling};
use crate::primitives::TerminalColorCaps;

#[test]
fn test_plain_styling_leaves_text_untouched() {
    let styling = create_test_styling();

    assert_eq!(styling.style_error("boom"), "boom");
    assert_eq!(styling.style_subtle("fmt"), "fmt");
    assert_eq!(styling.format_success("done"), "+ done");
    assert_eq!(styling.format_warning("careful"), "! careful");
}

#[test]
fn test_colored_styling_adds_escapes() {
    let caps = TerminalCapabilities {
        color: TerminalColorCaps::Ansi256,
        ..create_test_capabilities()
    };
    let styling = StyleManager::new(&caps);

    let styled = styling.style_success("ok");
    assert_ne!(styled, "ok");
    assert!(styled.contains("\u{1b}["));
    assert_eq!(console::strip_ansi_codes(&styled), "ok");
}

#[test]
fn test_unicode_symbols_follow_capabilities() {
    let caps = TerminalCapabilities {
        unicode: true,
        ..create_test_capabilities()
    };
    let styling = StyleManager::new(&caps);

    assert_eq!(styling.symbols().checkmark, "✓");
    assert_eq!(create_test_styling().symbols().checkmark, "+");
}

#[test]
fn test_pad_ignores_escape_sequences() {
    let caps = TerminalCapabilities {
        color: TerminalColorCaps::Ansi16,
        ..create_test_capabilities()
    };
    let styling = StyleManager::new(&caps);

    let padded = styling.pad(&styling.style_emphasis("abc"), 6);
    assert_eq!(console::measure_text_width(&padded), 6);
}

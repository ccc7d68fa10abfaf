//! Test utilities for display-dependent tests

use crate::display::styling::StyleManager;
use crate::terminal::TerminalCapabilities;

/// Create test styling with minimal capabilities
pub fn create_test_styling() -> StyleManager {
    StyleManager::new(&create_test_capabilities())
}

/// Create test terminal capabilities with minimal features
pub fn create_test_capabilities() -> TerminalCapabilities {
    TerminalCapabilities::plain()
}

//! Terminal display system
//!
//! Semantic APIs for user-facing output that adapt to terminal
//! capabilities. Logging goes through `tracing`; everything meant for the
//! user (status lines, layer tables, spinners) goes through here.

use crate::primitives::ConfigError;
use crate::terminal::TerminalCapabilities;
use std::sync::OnceLock;

pub mod live;
pub mod mock;
pub mod providers;
pub mod status;
pub mod structured;
pub mod styling;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use live::LiveDisplayProvider;
pub use mock::{DisplayCall, MockDisplayProvider};
pub use providers::{
    DisplayProvider, DisplayProviderExt, ProgressProvider, ProgressTracker, StatusProvider,
    StructuredProvider,
};

// Global display manager - initialized once with terminal capabilities
static GLOBAL_DISPLAY: OnceLock<Display> = OnceLock::new();

/// Main display manager that coordinates all user-facing communication
pub struct Display {
    styling: styling::StyleManager,
}

impl Display {
    fn new(capabilities: TerminalCapabilities) -> Self {
        Self {
            styling: styling::StyleManager::new(&capabilities),
        }
    }

    /// Initialize global display system with terminal capabilities
    pub fn init(capabilities: TerminalCapabilities) -> Result<&'static Self, ConfigError> {
        GLOBAL_DISPLAY
            .set(Self::new(capabilities))
            .map_err(|_| ConfigError::AlreadyInitialized)?;

        Ok(Self::global())
    }

    /// Global display; plain capabilities if [`Display::init`] never ran
    pub fn global() -> &'static Self {
        GLOBAL_DISPLAY.get_or_init(|| Self::new(TerminalCapabilities::plain()))
    }

    /// Status updates with semantic intent
    pub fn status() -> status::StatusDisplay<'static> {
        status::StatusDisplay::new(&Self::global().styling)
    }

    /// Structured output (tables, key-value pairs)
    pub fn table() -> structured::StructuredDisplay<'static> {
        structured::StructuredDisplay::new(&Self::global().styling)
    }
}

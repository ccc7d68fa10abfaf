//! # golayers Library
//!
//! Dependency layering for the packages of a Go module.
//!
//! ## Core Modules
//!
//! - [`analysis`] - Source scanning, import extraction, graph building, cycle
//!   detection and layered topological ordering
//! - [`render`] - Graphviz DOT and HTML output
//! - [`application`] - CLI interface, configuration, sessions and commands
//! - [`display`] - Semantic user-facing output
//! - [`logger`] - Structured logging with progress tracking
//! - [`primitives`] - Foundation types and errors
//! - [`terminal`] - Terminal capability detection
//!
//! ## Quick Start
//!
//! ```no_run
//! let outcome = golayers_lib::analysis::analyze(std::path::Path::new(".")).unwrap();
//! println!("{}", serde_json::to_string_pretty(&outcome.report()).unwrap());
//! ```

pub mod analysis;
pub mod application;
pub mod display;
pub mod logger;
pub mod primitives;
pub mod render;
pub mod terminal;

// Re-export commonly used types for convenience
pub use analysis::{AnalysisError, AnalysisOutcome, AnalysisReport, analyze};
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use logger::Logger;
pub use primitives::{
    ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, TerminalCapsDetectIntent,
    TerminalColorCaps,
};
pub use terminal::TerminalCapabilities;

// Private imports for the main function
use anyhow::Result;

pub fn main() -> Result<()> {
    // Defaults -> .env -> env vars -> CLI, validated
    let config = AppConfig::load()?;

    // Execute the command
    execute_command(config)
}

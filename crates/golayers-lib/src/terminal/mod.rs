//! Terminal capability detection
//!
//! Environment-based detection only: color level from `TERM`/`COLORTERM`,
//! unicode support from the locale, and whether stdout is a terminal.
//! The color intent from configuration has the final say.

use crate::application::AppConfig;
use crate::primitives::{ConfigError, TerminalCapsDetectIntent, TerminalColorCaps};
use serde::Deserialize;
use std::io::{self, IsTerminal};

/// Variables consulted during detection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TerminalEnvConfig {
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub lang: Option<String>,
    pub lc_all: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TerminalCapabilities {
    pub color: TerminalColorCaps,
    pub unicode: bool,
    pub is_tty: bool,
}

impl TerminalCapabilities {
    pub fn detect_from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let env_config = envy::from_env::<TerminalEnvConfig>()?;
        let is_tty = io::stdout().is_terminal();
        Ok(Self::resolve(&env_config, config.color, is_tty))
    }

    /// Pure resolution step, separated from the environment for testing
    pub fn resolve(
        env_config: &TerminalEnvConfig,
        intent: TerminalCapsDetectIntent,
        is_tty: bool,
    ) -> Self {
        let detected = TerminalColorCaps::from_env_values(
            env_config.term.as_deref(),
            env_config.colorterm.as_deref(),
        );

        let color = match intent {
            TerminalCapsDetectIntent::Never => TerminalColorCaps::None,
            TerminalCapsDetectIntent::Always => detected.max(TerminalColorCaps::Ansi16),
            TerminalCapsDetectIntent::Auto if is_tty => detected,
            TerminalCapsDetectIntent::Auto => TerminalColorCaps::None,
        };

        let locale = env_config
            .lc_all
            .as_deref()
            .or(env_config.lang.as_deref())
            .unwrap_or_default()
            .to_ascii_uppercase();
        let unicode = locale.contains("UTF-8") || locale.contains("UTF8");

        Self {
            color,
            unicode,
            is_tty,
        }
    }

    /// Minimal capabilities for non-interactive contexts
    pub fn plain() -> Self {
        Self {
            color: TerminalColorCaps::None,
            unicode: false,
            is_tty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}

//! Standard environment conventions: NO_COLOR, FORCE_COLOR, CLICOLOR, CI

use crate::primitives::{ConfigError, TerminalCapsDetectIntent};
use serde::Deserialize;

/// Environment variables that affect application behavior
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// Any non-empty value disables color
    pub no_color: Option<String>,
    /// 0/false disables, 1/2/3/true enables
    pub force_color: Option<String>,
    /// 0 disables color
    pub clicolor: Option<String>,
    /// Any value means a CI run: no color, no prompts
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(envy::from_env::<Self>()?)
    }

    pub fn is_ci(&self) -> bool {
        self.ci.is_some()
    }

    /// Apply environment variables to color configuration
    ///
    /// Precedence: CI > FORCE_COLOR > NO_COLOR > CLICOLOR
    pub fn apply_color_config(&self, color: TerminalCapsDetectIntent) -> TerminalCapsDetectIntent {
        if self.is_ci() {
            return TerminalCapsDetectIntent::Never;
        }

        match self.force_color.as_deref() {
            Some("0") | Some("false") => return TerminalCapsDetectIntent::Never,
            Some("1") | Some("2") | Some("3") | Some("true") => {
                return TerminalCapsDetectIntent::Always;
            }
            _ => {}
        }

        if self.no_color.as_deref().is_some_and(|value| !value.is_empty()) {
            return TerminalCapsDetectIntent::Never;
        }

        if self.clicolor.as_deref() == Some("0") {
            return TerminalCapsDetectIntent::Never;
        }

        color
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}

//! Terminal color intent and capability levels

use super::ConfigError;
use clap::ValueEnum;
use std::str::FromStr;

use super::shared::impl_fromstr_for_value_enum;

/// Runtime color detection intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalCapsDetectIntent {
    /// Let the terminal module decide
    /// alias: auto, automatic, detect, default
    Auto,

    /// Explicitly enable (useful in non-interactive)
    /// alias: always, force, on
    Always,

    /// Explicitly disable
    /// alias: never, off
    Never,
}

/// Terminal color capability levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerminalColorCaps {
    None,
    Ansi16,
    Ansi256,
    TrueColor,
}

impl TerminalColorCaps {
    /// Derive a color level from `TERM`/`COLORTERM` values
    pub fn from_env_values(term: Option<&str>, colorterm: Option<&str>) -> Self {
        if let Some(colorterm) = colorterm {
            if colorterm.eq_ignore_ascii_case("truecolor") || colorterm.eq_ignore_ascii_case("24bit")
            {
                return Self::TrueColor;
            }
        }

        match term {
            None | Some("") | Some("dumb") => Self::None,
            Some(term) if term.contains("256color") => Self::Ansi256,
            Some(_) => Self::Ansi16,
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self != Self::None
    }
}

impl ValueEnum for TerminalCapsDetectIntent {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Auto, Self::Always, Self::Never]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Auto => Some(
                clap::builder::PossibleValue::new("auto")
                    .alias("automatic")
                    .alias("detect")
                    .alias("default"),
            ),
            Self::Always => Some(
                clap::builder::PossibleValue::new("always")
                    .alias("force")
                    .alias("on"),
            ),
            Self::Never => Some(clap::builder::PossibleValue::new("never").alias("off")),
        }
    }
}

impl_fromstr_for_value_enum!(
    TerminalCapsDetectIntent,
    "invalid terminal capability detection intent"
);

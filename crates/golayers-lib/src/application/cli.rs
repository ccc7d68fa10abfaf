use crate::primitives::ConfigError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;

/// golayers CLI - dependency layers of a Go module
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "golayers")]
#[command(about = "Order the packages of a Go module into dependency layers")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::from(Cli::parse()))
    }
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// Available golayers commands
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Commands {
    /// Build the package graph, check for cycles, print and render the layers
    Analyze(AnalyzeArgs),

    /// Only report whether the package graph has cycles
    Cycles {
        /// Module root containing go.mod
        #[arg(help = "Module root directory (prompted when omitted)")]
        dir: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

/// Options for the analyze command
#[derive(Debug, Clone, Default, PartialEq, Args)]
pub struct AnalyzeArgs {
    /// Module root containing go.mod
    #[arg(help = "Module root directory (prompted when omitted)")]
    pub dir: Option<PathBuf>,

    /// Skip producing the HTML graph
    #[arg(long)]
    pub no_render: bool,

    /// Write the HTML graph but do not open it
    #[arg(long)]
    pub no_open: bool,

    /// Directory for the HTML graph (defaults to the working directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the analysis report as JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Print one flat build order instead of layers
    #[arg(long)]
    pub flat: bool,
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}

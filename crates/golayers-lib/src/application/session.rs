//! Command session architecture
//!
//! Implements the Session-Scoped Dependency Injection Pattern.
//! Each command execution creates a session that owns all ephemeral state
//! and hands providers to the handlers as trait objects.

use crate::application::config::AppConfig;
use crate::display::{DisplayProvider, LiveDisplayProvider};
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Graphviz layout executable
pub const GRAPHVIZ_DOT: &str = "dot";

/// Provider trait for filesystem operations
pub trait FileSystemProvider {
    fn current_dir(&self) -> Result<PathBuf>;

    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    fn is_directory(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

/// Process execution output
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Provider trait for process execution
pub trait ProcessProvider {
    /// Execute a command with given arguments in working directory
    fn execute(&self, command: &str, args: &[&str], working_dir: &Path) -> Result<ProcessOutput>;

    /// Whether Graphviz `dot` can be run, with its version line
    fn check_graphviz(&self) -> Result<(bool, String)>;
}

/// Provider trait for configuration access
pub trait ConfigProvider {
    fn app_config(&self) -> &AppConfig;
}

/// Provider trait for interactive user input operations
pub trait InteractiveProvider {
    /// Prompt for text input with a default value
    fn text_input(&self, prompt: &str, default: String) -> Result<String>;
}

/// Session trait that both CommandSession and MockCommandSession implement
pub trait Session {
    fn display(&self) -> &dyn DisplayProvider;

    fn filesystem(&self) -> &dyn FileSystemProvider;

    fn process(&self) -> &dyn ProcessProvider;

    fn config(&self) -> &dyn ConfigProvider;

    fn interactive(&self) -> &dyn InteractiveProvider;

    /// Directory relative paths are resolved against
    fn workdir(&self) -> Result<PathBuf> {
        match &self.config().app_config().workdir {
            Some(workdir) => Ok(workdir.clone()),
            None => self.filesystem().current_dir(),
        }
    }

    /// Resolve a user-supplied path against [`workdir`](Self::workdir)
    fn resolve_path(&self, path: PathBuf) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path)
        } else {
            Ok(self.workdir()?.join(path))
        }
    }
}

/// Live implementation of FileSystemProvider
pub struct LiveFileSystemProvider;

impl FileSystemProvider for LiveFileSystemProvider {
    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().context("Failed to get current directory")
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }
}

/// Live implementation of ProcessProvider
pub struct LiveProcessProvider {
    /// Custom PATH override for hermetic testing
    custom_path: Option<String>,
}

impl LiveProcessProvider {
    /// Create a new LiveProcessProvider with system PATH
    pub fn new() -> Self {
        Self { custom_path: None }
    }

    /// Create a LiveProcessProvider with custom PATH for hermetic testing
    pub fn with_custom_path(path: String) -> Self {
        Self {
            custom_path: Some(path),
        }
    }
}

impl Default for LiveProcessProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProvider for LiveProcessProvider {
    fn execute(&self, command: &str, args: &[&str], working_dir: &Path) -> Result<ProcessOutput> {
        use std::process::Command;

        let mut cmd = Command::new(command);
        cmd.args(args).current_dir(working_dir);

        if let Some(custom_path) = &self.custom_path {
            cmd.env("PATH", custom_path);
        }

        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute command: {}", command))?;

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }

    fn check_graphviz(&self) -> Result<(bool, String)> {
        let working_dir = std::env::temp_dir();
        match self.execute(GRAPHVIZ_DOT, &["-V"], &working_dir) {
            // `dot -V` reports on stderr
            Ok(output) if output.success => {
                let version = output
                    .stderr
                    .lines()
                    .chain(output.stdout.lines())
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                Ok((true, version))
            }
            Ok(_) | Err(_) => Ok((false, String::new())),
        }
    }
}

/// Live implementation of ConfigProvider
pub struct LiveConfigProvider {
    app_config: AppConfig,
}

impl LiveConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }
}

impl ConfigProvider for LiveConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }
}

/// Live implementation of InteractiveProvider
pub struct LiveInteractiveProvider {
    yes_mode: bool,
}

impl LiveInteractiveProvider {
    pub fn new(yes_mode: bool) -> Self {
        Self { yes_mode }
    }

    /// Check if we're in a TTY environment suitable for interactive prompts
    fn is_tty() -> bool {
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }
}

impl InteractiveProvider for LiveInteractiveProvider {
    fn text_input(&self, prompt: &str, default: String) -> Result<String> {
        if self.yes_mode || !Self::is_tty() {
            return Ok(default);
        }

        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .default(default)
            .interact_text()
            .context("Failed to read text input")
    }
}

/// CommandSession owns all ephemeral state for a single command execution
pub struct CommandSession<F, P, C, I>
where
    F: FileSystemProvider,
    P: ProcessProvider,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    display_provider: LiveDisplayProvider,
    filesystem_provider: F,
    process_provider: P,
    config_provider: C,
    interactive_provider: I,
}

impl
    CommandSession<
        LiveFileSystemProvider,
        LiveProcessProvider,
        LiveConfigProvider,
        LiveInteractiveProvider,
    >
{
    /// Create a new command session with owned state (production composition)
    pub fn new(app_config: AppConfig) -> Self {
        // Display and logger are process-global; a second session reuses them
        if !crate::logger::Logger::is_initialized() {
            match crate::terminal::TerminalCapabilities::detect_from_config(&app_config) {
                Ok(terminal_caps) => {
                    if let Err(e) = crate::display::Display::init(terminal_caps.clone()) {
                        tracing::debug!("Display already configured: {}", e);
                    }
                    if let Err(e) =
                        crate::logger::Logger::init(app_config.to_logger_config(&terminal_caps))
                    {
                        eprintln!("golayers: logging disabled: {}", e);
                    }
                }
                Err(e) => eprintln!("golayers: terminal detection failed: {}", e),
            }
        }

        let yes = app_config.yes;
        Self {
            display_provider: LiveDisplayProvider::new(),
            filesystem_provider: LiveFileSystemProvider,
            process_provider: LiveProcessProvider::new(),
            config_provider: LiveConfigProvider::new(app_config),
            interactive_provider: LiveInteractiveProvider::new(yes),
        }
    }
}

impl<F, P, C, I> CommandSession<F, P, C, I>
where
    F: FileSystemProvider,
    P: ProcessProvider,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    /// Create a new generic command session with custom providers (for testing)
    pub fn new_with_providers(
        filesystem_provider: F,
        process_provider: P,
        config_provider: C,
        interactive_provider: I,
    ) -> Self {
        Self {
            display_provider: LiveDisplayProvider::new(),
            filesystem_provider,
            process_provider,
            config_provider,
            interactive_provider,
        }
    }
}

impl<F, P, C, I> Session for CommandSession<F, P, C, I>
where
    F: FileSystemProvider,
    P: ProcessProvider,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    fn display(&self) -> &dyn DisplayProvider {
        &self.display_provider
    }

    fn filesystem(&self) -> &dyn FileSystemProvider {
        &self.filesystem_provider
    }

    fn process(&self) -> &dyn ProcessProvider {
        &self.process_provider
    }

    fn config(&self) -> &dyn ConfigProvider {
        &self.config_provider
    }

    fn interactive(&self) -> &dyn InteractiveProvider {
        &self.interactive_provider
    }
}

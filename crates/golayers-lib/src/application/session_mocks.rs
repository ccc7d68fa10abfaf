//! Mock implementations of session providers for testing
//!
//! These mocks let command handlers run without touching the terminal,
//! spawning processes, or writing artifacts to disk. Source trees are still
//! read from real directories; only the session's side effects are faked.

use crate::application::config::AppConfig;
use crate::application::session::*;
use crate::display::{DisplayProvider, MockDisplayProvider};
use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock filesystem provider with in-memory writes
///
/// Directories registered with [`with_directory`](Self::with_directory) and
/// real directories on disk both count as existing, so handlers can be
/// pointed at temp-dir source trees.
#[derive(Clone)]
pub struct MockFileSystemProvider {
    pub current_dir: PathBuf,
    /// In-memory filesystem: path -> content
    pub files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    pub directories: Arc<Mutex<BTreeSet<PathBuf>>>,
    /// Paths whose writes fail
    pub failing_writes: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MockFileSystemProvider {
    pub fn new() -> Self {
        Self {
            current_dir: PathBuf::from("/test/workdir"),
            files: Arc::new(Mutex::new(BTreeMap::new())),
            directories: Arc::new(Mutex::new(BTreeSet::new())),
            failing_writes: Arc::new(Mutex::new(BTreeSet::new())),
        }
    }

    pub fn with_current_dir(mut self, dir: PathBuf) -> Self {
        self.current_dir = dir.clone();
        self.directories.lock().unwrap().insert(dir);
        self
    }

    pub fn with_directory(self, dir: PathBuf) -> Self {
        self.directories.lock().unwrap().insert(dir);
        self
    }

    pub fn with_file(self, path: PathBuf, content: String) -> Self {
        if let Some(parent) = path.parent() {
            self.directories
                .lock()
                .unwrap()
                .insert(parent.to_path_buf());
        }
        self.files.lock().unwrap().insert(path, content);
        self
    }

    pub fn with_failing_write(self, path: PathBuf) -> Self {
        self.failing_writes.lock().unwrap().insert(path);
        self
    }

    /// Content written to `path`, if any
    pub fn written(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl Default for MockFileSystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemProvider for MockFileSystemProvider {
    fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if self.failing_writes.lock().unwrap().contains(path) {
            return Err(anyhow!("Mock write failure: {}", path.display()));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.directories.lock().unwrap().contains(path) || path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.directories
            .lock()
            .unwrap()
            .insert(path.to_path_buf());
        Ok(())
    }
}

/// Process call record for spy pattern
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessCall {
    pub command: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

/// Mock process provider for testing with spy pattern
pub struct MockProcessProvider {
    pub graphviz_available: bool,
    pub graphviz_version: String,
    pub calls: RefCell<Vec<ProcessCall>>,
    /// Results keyed by command name, consumed in order
    pub results: RefCell<HashMap<String, VecDeque<std::result::Result<ProcessOutput, String>>>>,
}

impl MockProcessProvider {
    pub fn new() -> Self {
        Self {
            graphviz_available: true,
            graphviz_version: "dot - graphviz version 2.43.0 (0)".to_string(),
            calls: RefCell::new(Vec::new()),
            results: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_graphviz_unavailable(mut self) -> Self {
        self.graphviz_available = false;
        self
    }

    /// Queue a result for the next call of `command`
    pub fn with_result(
        self,
        command: &str,
        result: std::result::Result<ProcessOutput, String>,
    ) -> Self {
        self.results
            .borrow_mut()
            .entry(command.to_string())
            .or_default()
            .push_back(result);
        self
    }

    /// Queue a successful result with the given stdout
    pub fn with_stdout(self, command: &str, stdout: &str) -> Self {
        self.with_result(
            command,
            Ok(ProcessOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                success: true,
            }),
        )
    }

    pub fn get_calls(&self) -> Vec<ProcessCall> {
        self.calls.borrow().clone()
    }

    pub fn get_calls_for_command(&self, command: &str) -> Vec<ProcessCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.command == command)
            .cloned()
            .collect()
    }
}

impl Default for MockProcessProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProvider for MockProcessProvider {
    fn execute(&self, command: &str, args: &[&str], working_dir: &Path) -> Result<ProcessOutput> {
        self.calls.borrow_mut().push(ProcessCall {
            command: command.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            working_dir: working_dir.to_path_buf(),
        });

        let queued = self
            .results
            .borrow_mut()
            .get_mut(command)
            .and_then(VecDeque::pop_front);

        match queued {
            Some(Ok(output)) => Ok(output),
            Some(Err(e)) => Err(anyhow!("{}", e)),
            None => Ok(ProcessOutput {
                stdout: String::new(),
                stderr: String::new(),
                success: true,
            }),
        }
    }

    fn check_graphviz(&self) -> Result<(bool, String)> {
        if self.graphviz_available {
            Ok((true, self.graphviz_version.clone()))
        } else {
            Ok((false, String::new()))
        }
    }
}

/// Mock config provider for testing
pub struct MockConfigProvider {
    pub app_config: AppConfig,
}

impl MockConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }
}

/// Mock interactive provider for testing
#[derive(Default)]
pub struct MockInteractiveProvider {
    yes_mode: bool,
    pub text_input_calls: Arc<Mutex<Vec<(String, String)>>>, // (prompt, default)
    pub text_input_response: Option<String>,
}

impl MockInteractiveProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_yes_mode(mut self, yes_mode: bool) -> Self {
        self.yes_mode = yes_mode;
        self
    }

    pub fn with_text_input(mut self, response: String) -> Self {
        self.text_input_response = Some(response);
        self
    }

    pub fn get_text_input_calls(&self) -> Vec<(String, String)> {
        self.text_input_calls.lock().unwrap().clone()
    }
}

impl InteractiveProvider for MockInteractiveProvider {
    fn text_input(&self, prompt: &str, default: String) -> Result<String> {
        self.text_input_calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), default.clone()));

        if self.yes_mode {
            return Ok(default);
        }
        Ok(self.text_input_response.clone().unwrap_or(default))
    }
}

/// Mock command session for testing
pub struct MockCommandSession {
    pub display_provider: MockDisplayProvider,
    pub filesystem_provider: MockFileSystemProvider,
    pub process_provider: MockProcessProvider,
    pub config_provider: MockConfigProvider,
    pub interactive_provider: MockInteractiveProvider,
}

impl MockCommandSession {
    pub fn new() -> Self {
        Self {
            display_provider: MockDisplayProvider::new(),
            filesystem_provider: MockFileSystemProvider::new(),
            process_provider: MockProcessProvider::new(),
            config_provider: MockConfigProvider::new(AppConfig::default()),
            interactive_provider: MockInteractiveProvider::new(),
        }
    }

    pub fn with_filesystem(mut self, filesystem: MockFileSystemProvider) -> Self {
        self.filesystem_provider = filesystem;
        self
    }

    pub fn with_process(mut self, process: MockProcessProvider) -> Self {
        self.process_provider = process;
        self
    }

    pub fn with_config(mut self, config: MockConfigProvider) -> Self {
        self.config_provider = config;
        self
    }

    pub fn with_interactive(mut self, interactive: MockInteractiveProvider) -> Self {
        self.interactive_provider = interactive;
        self
    }

    /// Recorded display output for assertions
    pub fn display_mock(&self) -> &MockDisplayProvider {
        &self.display_provider
    }
}

impl Default for MockCommandSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for MockCommandSession {
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

#[cfg(test)]
mod tests {
    include!("session_mocks.test.rs");
}

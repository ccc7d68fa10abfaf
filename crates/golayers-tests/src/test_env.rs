//! Hermetic test environment for E2E testing
//!
//! Creates an isolated directory with mock executables on a private PATH,
//! so the live process provider can be exercised without Graphviz or a
//! desktop viewer installed.

use anyhow::{Context, Result};
use golayers_lib::application::config::AppConfig;
use golayers_lib::application::session::{
    CommandSession, LiveConfigProvider, LiveFileSystemProvider, LiveInteractiveProvider,
    LiveProcessProvider,
};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// What a mock executable does when run
#[derive(Debug, Clone)]
pub enum MockBehavior {
    AlwaysSucceed,
    AlwaysFail { error: String },
    SucceedWithOutput { stdout: String, stderr: String },
}

/// Hermetic test environment with mock executables
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub bin_path: PathBuf,
    /// Where rendered artifacts land
    pub work_path: PathBuf,
}

fn single_quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "'\\''"))
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let bin_path = temp_dir.path().join("bin");
        let work_path = temp_dir.path().join("work");

        fs::create_dir_all(&bin_path)?;
        fs::create_dir_all(&work_path)?;

        Ok(Self {
            temp_dir,
            bin_path,
            work_path,
        })
    }

    fn log_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(format!("{}.log", name))
    }

    /// Install `name` on the private PATH
    pub fn add_mock_executable(&mut self, name: &str, behavior: MockBehavior) -> Result<()> {
        let executable_path = self.bin_path.join(name);
        let script = Self::generate_mock_script(name, &behavior, &self.log_path(name));
        fs::write(&executable_path, script)
            .with_context(|| format!("Failed to write mock {}", name))?;

        let mut perms = fs::metadata(&executable_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&executable_path, perms)?;
        Ok(())
    }

    fn generate_mock_script(name: &str, behavior: &MockBehavior, log_path: &Path) -> String {
        let behavior_code = match behavior {
            MockBehavior::AlwaysSucceed => "exit 0".to_string(),
            MockBehavior::AlwaysFail { error } => {
                format!("printf '%s\\n' {} >&2\nexit 1", single_quoted(error))
            }
            MockBehavior::SucceedWithOutput { stdout, stderr } => {
                let mut code = String::new();
                if !stdout.is_empty() {
                    code.push_str(&format!("printf '%s\\n' {}\n", single_quoted(stdout)));
                }
                if !stderr.is_empty() {
                    code.push_str(&format!("printf '%s\\n' {} >&2\n", single_quoted(stderr)));
                }
                code.push_str("exit 0");
                code
            }
        };

        format!(
            "#!/bin/sh\n# Mock executable: {}\nprintf '%s\\n' \"$*\" >> {}\n{}\n",
            name,
            single_quoted(&log_path.to_string_lossy()),
            behavior_code
        )
    }

    /// PATH with the mock directory first
    pub fn get_path_env(&self) -> String {
        format!("{}:/usr/bin:/bin", self.bin_path.display())
    }

    /// Argument lines of every call made to `name`
    pub fn get_mock_calls(&self, name: &str) -> Result<Vec<String>> {
        let log_path = self.log_path(name);
        if !log_path.exists() {
            return Ok(Vec::new());
        }
        Ok(fs::read_to_string(log_path)?
            .lines()
            .map(str::to_string)
            .collect())
    }
}

pub type HermeticSession =
    CommandSession<LiveFileSystemProvider, LiveProcessProvider, LiveConfigProvider, LiveInteractiveProvider>;

/// Live providers wired to a [`TestEnvironment`]
pub struct HermeticSessionBuilder {
    test_env: TestEnvironment,
}

impl HermeticSessionBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            test_env: TestEnvironment::new()?,
        })
    }

    pub fn with_mock_executable(mut self, name: &str, behavior: MockBehavior) -> Result<Self> {
        self.test_env.add_mock_executable(name, behavior)?;
        Ok(self)
    }

    /// Non-interactive session whose workdir is the environment's work directory
    pub fn build(self) -> Result<(HermeticSession, TestEnvironment)> {
        let app_config = AppConfig {
            workdir: Some(self.test_env.work_path.clone()),
            yes: true,
            ..AppConfig::default()
        };

        let session = CommandSession::new_with_providers(
            LiveFileSystemProvider,
            LiveProcessProvider::with_custom_path(self.test_env.get_path_env()),
            LiveConfigProvider::new(app_config),
            LiveInteractiveProvider::new(true),
        );

        Ok((session, self.test_env))
    }
}

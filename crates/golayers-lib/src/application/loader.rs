//! Configuration loading

use crate::primitives::ConfigError;

use super::{cli::CliConfig, config::AppConfig, env::EnvironmentConfig};

/// Dotenv files consulted in order; earlier files win
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

impl AppConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<CliConfig, ConfigError> {
        load_env_files()?;

        let config = Self::default().merge_with(Self::from_env()?);

        let mut cli_config = CliConfig::load()?;
        cli_config.app_config = Self::finalize(config, cli_config.app_config)?;
        Ok(cli_config)
    }

    /// Layer CLI values and standard environment conventions over `base`, then validate
    pub fn finalize(base: AppConfig, cli: AppConfig) -> Result<AppConfig, ConfigError> {
        let env_config = EnvironmentConfig::load()?;

        let mut config = base.merge_with(cli);
        config.color = env_config.apply_color_config(config.color);
        if env_config.is_ci() {
            config.yes = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Load dotenv files; a missing file is not an error
fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        match dotenvy::from_filename(env_file) {
            Ok(_) => tracing::debug!(file = env_file, "Loaded environment file"),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}

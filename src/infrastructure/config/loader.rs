use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project-local configuration directory
pub const CONFIG_DIR: &str = ".menu-roulette";

/// Prefix for environment overrides; nested keys are joined with `__`
pub const ENV_PREFIX: &str = "MENU_ROULETTE_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Generation base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("Generation model cannot be empty")]
    EmptyModel,

    #[error("Invalid timeout_secs: {0}. Must be between 1 and 600")]
    InvalidTimeout(u64),

    #[error("Invalid temperature: {0}. Must be between 0.0 and 2.0")]
    InvalidTemperature(f32),

    #[error("Invalid max_output_tokens: {0}. Must be at least 1")]
    InvalidMaxOutputTokens(u32),

    #[error("Invalid reveal_draws: {0}. Must be at most 200")]
    InvalidRevealDraws(usize),

    #[error("Invalid reveal_interval_ms: {0}. Must be at most 2000")]
    InvalidRevealInterval(u64),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration relative to the current directory
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .menu-roulette/config.yaml (project config, created by init)
    /// 3. .menu-roulette/local.yaml (local overrides, optional)
    /// 4. Environment variables (MENU_ROULETTE_* prefix)
    pub fn load() -> Result<Config> {
        Self::load_from_dir(".")
    }

    /// Same as [`ConfigLoader::load`] with the config directory under `root`
    pub fn load_from_dir(root: impl AsRef<Path>) -> Result<Config> {
        let dir = root.as_ref().join(CONFIG_DIR);
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(dir.join("config.yaml")))
            .merge(Yaml::file(dir.join("local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, without env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Path of the project config file under `root`
    pub fn project_config_path(root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(CONFIG_DIR).join("config.yaml")
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let generation = &config.generation;
        if generation.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        if generation.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        if !(1..=600).contains(&generation.timeout_secs) {
            return Err(ConfigError::InvalidTimeout(generation.timeout_secs));
        }

        if !(0.0..=2.0).contains(&generation.temperature) {
            return Err(ConfigError::InvalidTemperature(generation.temperature));
        }

        if generation.max_output_tokens == 0 {
            return Err(ConfigError::InvalidMaxOutputTokens(
                generation.max_output_tokens,
            ));
        }

        if config.roulette.reveal_draws > 200 {
            return Err(ConfigError::InvalidRevealDraws(config.roulette.reveal_draws));
        }

        if config.roulette.reveal_interval_ms > 2000 {
            return Err(ConfigError::InvalidRevealInterval(
                config.roulette.reveal_interval_ms,
            ));
        }

        Ok(())
    }
}

//! Implementation of the `menu-roulette init` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokio::fs;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::config::{CONFIG_DIR, ENV_PREFIX};
use crate::infrastructure::credentials::API_KEY_ENV;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub config_path: PathBuf,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![self.message.clone()];
        if self.success {
            lines.push(format!("\nConfig written to {}", self.config_path.display()));
            lines.push(format!(
                "Set {API_KEY_ENV} or generation.api_key for AI recommendations."
            ));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Default config file contents with a short header
pub fn default_config_yaml() -> Result<String> {
    let body = serde_yaml::to_string(&Config::default()).context("Failed to render default config")?;
    Ok(format!(
        "# menu-roulette configuration\n\
         # Overrides: {CONFIG_DIR}/local.yaml, then {ENV_PREFIX}* environment variables\n\
         # (nested keys joined with __, e.g. {ENV_PREFIX}GENERATION__MODEL).\n\
         # The API key is read from generation.api_key or {API_KEY_ENV}.\n\
         {body}"
    ))
}

pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let target_path = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(&args.path)
    };

    let config_dir = target_path.join(CONFIG_DIR);
    let config_path = config_dir.join("config.yaml");

    if config_path.exists() && !args.force {
        let output_data = InitOutput {
            success: false,
            message: "Already initialized. Use --force to overwrite the config.".to_string(),
            config_path,
        };
        output(&output_data, json_mode);
        return Ok(());
    }

    fs::create_dir_all(&config_dir)
        .await
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;
    fs::write(&config_path, default_config_yaml()?)
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let output_data = InitOutput {
        success: true,
        message: if args.force {
            "Configuration reset to defaults.".to_string()
        } else {
            "Project initialized successfully.".to_string()
        },
        config_path,
    };

    output(&output_data, json_mode);
    Ok(())
}

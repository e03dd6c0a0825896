//! Credentials management infrastructure
//!
//! Resolves the generation API key from configuration or the environment.

use thiserror::Error;

use crate::domain::models::GenerationConfig;

/// Environment variable consulted when the config carries no key
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error(
        "No API key configured. Set generation.api_key in .menu-roulette/config.yaml \
         or export {API_KEY_ENV}, or use --strategy tabular"
    )]
    MissingApiKey,
}

/// API key from `generation.api_key`, falling back to `GOOGLE_API_KEY`
///
/// Blank values count as missing.
pub fn resolve_api_key(config: &GenerationConfig) -> Result<String, CredentialError> {
    config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .or_else(|| {
            std::env::var(API_KEY_ENV)
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty())
        })
        .ok_or(CredentialError::MissingApiKey)
}

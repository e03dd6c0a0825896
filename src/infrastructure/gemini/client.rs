use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::errors::GeminiApiError;
use super::types::{GenerateContentRequest, GenerateContentResponse, GenerationParams};
use crate::domain::errors::GenerationError;
use crate::domain::models::GenerationConfig;
use crate::domain::ports::TextGenerator;

/// Configuration for the Gemini HTTP client
#[derive(Clone)]
pub struct GeminiClientConfig {
    /// Google AI API key
    pub api_key: String,

    /// Base URL for the Gemini API
    pub base_url: String,

    /// Model identifier, e.g. `gemini-2.5-pro`
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Sampling temperature
    pub temperature: f32,

    /// Upper bound on generated tokens
    pub max_output_tokens: u32,
}

impl GeminiClientConfig {
    /// Client settings from the `generation` config section and a resolved key
    pub fn from_generation(config: &GenerationConfig, api_key: String) -> Self {
        Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

impl std::fmt::Debug for GeminiClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClientConfig")
            .field("api_key", &scrub_key(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

/// Keep a short prefix of the key for diagnostics and hide the rest.
fn scrub_key(api_key: &str) -> String {
    match api_key.get(..8) {
        Some(prefix) if api_key.len() > 8 => format!("{prefix}...[REDACTED]"),
        _ => "[REDACTED]".to_string(),
    }
}

/// HTTP client for the Gemini `generateContent` endpoint
///
/// One request per call. Failures surface immediately; there is no retry or
/// client-side rate limiting because every retry is a user action.
pub struct GeminiClient {
    http_client: ReqwestClient,
    base_url: String,
    model: String,
    timeout: Duration,
    params: GenerationParams,
}

impl GeminiClient {
    /// Create a new Gemini API client
    ///
    /// # Example
    /// ```no_run
    /// use menu_roulette::infrastructure::gemini::{GeminiClient, GeminiClientConfig};
    /// use menu_roulette::domain::models::GenerationConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = GeminiClientConfig::from_generation(&GenerationConfig::default(), "key".into());
    /// let client = GeminiClient::new(config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: GeminiClientConfig) -> Result<Self, GeminiApiError> {
        info!(
            "Initializing Gemini API client: base_url={}, model={}, timeout={}s, api_key={}",
            config.base_url,
            config.model,
            config.timeout_secs,
            scrub_key(&config.api_key)
        );

        let mut api_key = header::HeaderValue::from_str(&config.api_key)
            .map_err(|e| GeminiApiError::InvalidRequest(format!("Invalid API key: {e}")))?;
        api_key.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert("x-goog-api-key", api_key);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let timeout = Duration::from_secs(config.timeout_secs);
        let http_client = ReqwestClient::builder()
            .pool_max_idle_per_host(4)
            .timeout(timeout)
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()
            .map_err(GeminiApiError::NetworkError)?;

        Ok(Self {
            http_client,
            base_url: config.base_url,
            model: config.model,
            timeout,
            params: GenerationParams {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            },
        })
    }

    /// Send a prompt and return the generated text
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_chars = prompt.chars().count()))]
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiApiError> {
        let request = GenerateContentRequest::single_prompt(prompt, self.params);
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);

        debug!("POST {}", url);

        let result = match self.http_client.post(&url).json(&request).send().await {
            Ok(response) => self.handle_response(response).await,
            Err(err) => Err(GeminiApiError::from(err)),
        };

        if let Err(err) = &result {
            error!(transient = err.is_transient(), "generateContent failed: {}", err);
        }

        result
    }

    async fn handle_response(&self, response: Response) -> Result<String, GeminiApiError> {
        let status = response.status();

        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            warn!("API error ({}): {}", status, body);
            return Err(GeminiApiError::from_status(status, &body));
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        if let Some(usage) = parsed.usage_metadata {
            info!(
                "generateContent succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        parsed.text().ok_or_else(|| {
            let reason = parsed
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "none".to_string());
            GeminiApiError::EmptyResponse(reason)
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.generate_content(prompt).await.map_err(|err| match err {
            GeminiApiError::Timeout => GenerationError::Timeout(self.timeout),
            other => other.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: &str) -> GeminiClientConfig {
        GeminiClientConfig::from_generation(&GenerationConfig::default(), api_key.to_string())
    }

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new(config("AIzaSyTestKey")).unwrap();
        assert_eq!(client.model(), "gemini-2.5-pro");
        assert_eq!(client.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_header_key_rejected() {
        let result = GeminiClient::new(config("bad\nkey"));
        assert!(matches!(result, Err(GeminiApiError::InvalidRequest(_))));
    }

    #[test]
    fn test_api_key_scrubbing() {
        assert_eq!(scrub_key("AIzaSyABCDEFGHIJ"), "AIzaSyAB...[REDACTED]");
        assert_eq!(scrub_key("short"), "[REDACTED]");

        let debug = format!("{:?}", config("AIzaSyABCDEFGHIJ"));
        assert!(!debug.contains("CDEFGHIJ"));
    }

    #[test]
    fn test_trailing_slash_trimmed_from_base_url() {
        let generation = GenerationConfig {
            base_url: "http://localhost:1234/".to_string(),
            ..GenerationConfig::default()
        };
        let config = GeminiClientConfig::from_generation(&generation, "k".to_string());
        assert_eq!(config.base_url, "http://localhost:1234");
    }
}

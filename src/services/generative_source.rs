//! Candidate source backed by the hosted text-generation model.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::domain::errors::GenerationError;
use crate::domain::models::{CandidateSet, Context, Strategy};
use crate::domain::ports::{CandidateSource, TextGenerator};
use crate::services::prompt_builder::PromptBuilder;
use crate::services::response_parser::parse_candidates;

/// Prompt-and-parse candidate source
///
/// Calls the generator exactly once per request. A failed call or a short
/// response is reported as-is; the user decides whether to try again.
pub struct GenerativeSource {
    generator: Arc<dyn TextGenerator>,
    prompt: PromptBuilder,
    timeout: Option<Duration>,
}

impl GenerativeSource {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            prompt: PromptBuilder::new(),
            timeout: None,
        }
    }

    /// Bound the whole generation call, on top of any client-side timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    async fn call_generator(&self, prompt: &str) -> Result<String, GenerationError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.generator.generate(prompt))
                .await
                .map_err(|_| GenerationError::Timeout(limit))?,
            None => self.generator.generate(prompt).await,
        }
    }
}

#[async_trait]
impl CandidateSource for GenerativeSource {
    fn strategy(&self) -> Strategy {
        Strategy::Generative
    }

    fn requires_location(&self) -> bool {
        true
    }

    fn model(&self) -> Option<&str> {
        Some(self.generator.model())
    }

    #[instrument(skip(self, context), fields(model = %self.generator.model(), meal_time = ?context.meal_time))]
    async fn candidates(&mut self, context: &Context) -> Result<CandidateSet, GenerationError> {
        let prompt = self.prompt.build(context);
        let response = self.call_generator(&prompt).await.inspect_err(|err| {
            warn!(error = %err, "generation call failed");
        })?;

        let set = parse_candidates(&response).inspect_err(|err| {
            warn!(error = %err, response_len = response.len(), "unusable generation response");
        })?;

        info!(candidates = ?set.names(), "generated candidates");
        Ok(set)
    }
}

use async_trait::async_trait;

use crate::domain::errors::GenerationError;

/// Port for the hosted text-generation capability
///
/// One complete prompt in, free text out. No streaming and no conversation
/// state is carried between calls. Implementations must not retry on their
/// own; retrying is always an explicit user action.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier, for logging and display
    fn model(&self) -> &str;

    /// Generate a completion for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

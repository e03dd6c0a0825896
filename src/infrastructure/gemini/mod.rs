pub mod client;
pub mod errors;
pub mod types;

pub use client::{GeminiClient, GeminiClientConfig};
pub use errors::GeminiApiError;
pub use types::{GenerateContentRequest, GenerateContentResponse, GenerationParams};

//! Infrastructure layer module
//!
//! External integrations and adapters:
//! - Gemini API client (implements the `TextGenerator` port)
//! - Configuration management
//! - Logging infrastructure
//! - Credentials resolution

pub mod config;
pub mod credentials;
pub mod gemini;
pub mod logging;

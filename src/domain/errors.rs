//! Domain errors for the recommendation pipeline.

use std::time::Duration;
use thiserror::Error;

use super::models::Stage;

/// Message shown to the user for any failed generation attempt.
pub const RETRY_HINT: &str = "AI가 고민을 너무 많이 했나봐요. 다시 버튼을 눌러주세요!";

/// Failure to produce a candidate set
///
/// Service and format failures share one user-facing message; the variants
/// exist for logging.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generation service failed: {0}")]
    Service(String),

    #[error("Generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Response contained {found} usable candidate(s), expected {expected}")]
    Malformed { found: usize, expected: usize },

    #[error("No menu entries match price tier {0}")]
    NoMatchingEntries(u8),
}

impl GenerationError {
    pub const fn user_message(&self) -> &'static str {
        RETRY_HINT
    }
}

/// Recoverable validation problem with the submitted inputs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Location is required for AI recommendations")]
    MissingLocation,
}

/// Errors raised by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Cannot {action} while session is {stage}")]
    InvalidTransition { action: &'static str, stage: Stage },
}

impl SessionError {
    /// Text suitable for direct display to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Input(err) => err.to_string(),
            Self::Generation(err) => err.user_message().to_string(),
            Self::InvalidTransition { .. } => self.to_string(),
        }
    }

    /// True when the inputs themselves were rejected.
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

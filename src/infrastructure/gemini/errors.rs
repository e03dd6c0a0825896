use reqwest::StatusCode;
use thiserror::Error;

use super::types::ErrorEnvelope;
use crate::domain::errors::GenerationError;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiApiError {
    /// Malformed request (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Missing, invalid, or unauthorized API key (HTTP 401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Unknown model (HTTP 404)
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Quota or rate limit exhausted (HTTP 429)
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Server-side failure (HTTP 5xx)
    #[error("Server error ({0}): {1}")]
    ServerError(StatusCode, String),

    /// Network or connection error
    #[error("Network error: {0}")]
    NetworkError(#[source] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Response body could not be decoded
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Successful status with no usable text
    #[error("Response contained no text (finish reason: {0})")]
    EmptyResponse(String),

    /// Unexpected status
    #[error("Unknown error ({0}): {1}")]
    UnknownError(StatusCode, String),
}

impl GeminiApiError {
    /// Classify a non-success response
    ///
    /// The service's own error message is preferred over the raw body when
    /// the body parses as an error envelope.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| body.to_string());

        match status {
            StatusCode::BAD_REQUEST => Self::InvalidRequest(message),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Self::AuthenticationFailed(message)
            }
            StatusCode::NOT_FOUND => Self::ModelNotFound(message),
            StatusCode::TOO_MANY_REQUESTS => Self::QuotaExceeded(message),
            status if status.is_server_error() => Self::ServerError(status, message),
            _ => Self::UnknownError(status, message),
        }
    }

    /// True when the same request could plausibly succeed later
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::QuotaExceeded(_) | Self::ServerError(_, _) | Self::Timeout | Self::NetworkError(_)
        )
    }
}

impl From<reqwest::Error> for GeminiApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::NetworkError(err)
        }
    }
}

impl From<GeminiApiError> for GenerationError {
    fn from(err: GeminiApiError) -> Self {
        Self::Service(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            GeminiApiError::from_status(StatusCode::BAD_REQUEST, "bad"),
            GeminiApiError::InvalidRequest(_)
        ));
        assert!(matches!(
            GeminiApiError::from_status(StatusCode::UNAUTHORIZED, ""),
            GeminiApiError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            GeminiApiError::from_status(StatusCode::FORBIDDEN, ""),
            GeminiApiError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            GeminiApiError::from_status(StatusCode::NOT_FOUND, ""),
            GeminiApiError::ModelNotFound(_)
        ));
        assert!(matches!(
            GeminiApiError::from_status(StatusCode::TOO_MANY_REQUESTS, ""),
            GeminiApiError::QuotaExceeded(_)
        ));
        assert!(matches!(
            GeminiApiError::from_status(StatusCode::SERVICE_UNAVAILABLE, ""),
            GeminiApiError::ServerError(StatusCode::SERVICE_UNAVAILABLE, _)
        ));
        assert!(matches!(
            GeminiApiError::from_status(StatusCode::IM_A_TEAPOT, ""),
            GeminiApiError::UnknownError(_, _)
        ));
    }

    #[test]
    fn test_envelope_message_is_extracted() {
        let body = r#"{"error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}}"#;
        let err = GeminiApiError::from_status(StatusCode::TOO_MANY_REQUESTS, body);
        assert_eq!(err.to_string(), "Quota exceeded: Resource has been exhausted");
    }

    #[test]
    fn test_transient_errors() {
        assert!(GeminiApiError::Timeout.is_transient());
        assert!(GeminiApiError::QuotaExceeded(String::new()).is_transient());
        assert!(!GeminiApiError::AuthenticationFailed(String::new()).is_transient());
        assert!(!GeminiApiError::EmptyResponse("SAFETY".to_string()).is_transient());
    }

    #[test]
    fn test_converts_to_service_failure() {
        let err: GenerationError = GeminiApiError::ModelNotFound("gemini-x".to_string()).into();
        assert!(matches!(err, GenerationError::Service(msg) if msg.contains("gemini-x")));
    }
}

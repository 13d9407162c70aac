//! Error types for the OpenAI adapter

use studio_application::ClientError;
use thiserror::Error;

/// Result type alias for OpenAI operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when talking to an OpenAI-compatible endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Response contained no {0}")]
    MissingContent(&'static str),

    #[error("Invalid base64 image payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl OpenAiError {
    /// Build a status error from a response body, preferring the API's own
    /// `error.message` when the body carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<super::protocol::ApiErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        OpenAiError::Status { status, message }
    }
}

impl From<OpenAiError> for ClientError {
    fn from(error: OpenAiError) -> Self {
        match error {
            OpenAiError::Transport(e) => ClientError::Connection(e.to_string()),
            OpenAiError::Status {
                status: 401 | 403,
                message,
            } => ClientError::Unauthorized(message),
            OpenAiError::Status {
                status: 429,
                message,
            } => ClientError::RateLimited(message),
            OpenAiError::Status { status, message } => ClientError::Api { status, message },
            e @ (OpenAiError::ParseError { .. } | OpenAiError::MissingContent(_)) => {
                ClientError::MalformedResponse(e.to_string())
            }
            OpenAiError::Base64(e) => ClientError::Decode(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_api_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let error = OpenAiError::from_status(401, body);
        assert_eq!(error.to_string(), "HTTP 401: Incorrect API key provided");
    }

    #[test]
    fn test_status_falls_back_to_raw_body() {
        let error = OpenAiError::from_status(502, "  Bad Gateway \n");
        assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_client_error_mapping() {
        assert!(matches!(
            ClientError::from(OpenAiError::from_status(403, "forbidden")),
            ClientError::Unauthorized(_)
        ));
        assert!(matches!(
            ClientError::from(OpenAiError::from_status(429, "slow down")),
            ClientError::RateLimited(_)
        ));
        assert_eq!(
            ClientError::from(OpenAiError::from_status(400, "bad size")),
            ClientError::Api {
                status: 400,
                message: "bad size".to_string()
            }
        );
        assert!(matches!(
            ClientError::from(OpenAiError::MissingContent("choices")),
            ClientError::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_base64_failure_is_decode_error() {
        use base64::Engine;
        let err = base64::engine::general_purpose::STANDARD
            .decode("***")
            .unwrap_err();
        assert!(ClientError::from(OpenAiError::from(err)).is_decode());
    }
}

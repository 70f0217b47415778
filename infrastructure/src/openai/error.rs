//! Error types for the OpenAI adapter

use focus_application::GatewayError;
use thiserror::Error;

/// Result type alias for OpenAI operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Upper bound on how much of an error body is kept
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Errors that can occur when talking to the chat-completions endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("no phrases generated")]
    NoChoices,
}

impl OpenAiError {
    /// Classify a `reqwest` failure
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Connect(error.to_string())
        } else if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }

    /// Non-success HTTP status with a shortened body
    pub fn status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            body: focus_domain::preview(body, MAX_ERROR_BODY_CHARS),
        }
    }
}

impl From<OpenAiError> for GatewayError {
    fn from(error: OpenAiError) -> Self {
        match error {
            OpenAiError::Timeout => GatewayError::Timeout,
            OpenAiError::Connect(msg) => GatewayError::ConnectionError(msg),
            OpenAiError::Status {
                status: 401 | 403,
                body,
            } => GatewayError::Unauthorized(body),
            e @ OpenAiError::Status { .. } => GatewayError::RequestFailed(e.to_string()),
            OpenAiError::Transport(msg) => GatewayError::RequestFailed(msg),
            OpenAiError::Decode(msg) => GatewayError::InvalidResponse(msg),
            OpenAiError::NoChoices => GatewayError::EmptyResponse,
            e @ OpenAiError::ClientBuild(_) => GatewayError::Other(e.to_string()),
        }
    }
}

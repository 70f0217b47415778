//! Completion gateway port
//!
//! Defines the interface for calling a chat-completion provider.

use async_trait::async_trait;
use focus_domain::{CompletionRequest, Credential};
use thiserror::Error;

/// Errors that can occur during one completion call
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Rejected credential: {0}")]
    Unauthorized(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("no phrases generated")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for chat-completion calls
///
/// This port defines how the application layer talks to the completion
/// provider. Implementations (adapters) live in the infrastructure layer.
/// Each call is authenticated with the credential it is given, so a single
/// gateway can serve every key in the rotation.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Issue one completion call and return the text of every choice
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> Result<Vec<String>, GatewayError>;
}

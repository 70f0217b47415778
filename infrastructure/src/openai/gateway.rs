//! OpenAI completion gateway implementation

use super::error::{OpenAiError, Result};
use super::protocol::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use focus_application::{CompletionGateway, GatewayError};
use focus_domain::{CompletionRequest, Credential};
use std::time::Duration;
use tracing::{debug, info};

/// Path appended to the configured base URL
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Completion gateway for OpenAI-compatible chat-completions endpoints
pub struct OpenAiGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl OpenAiGateway {
    /// Create a gateway for `base_url` (e.g. `https://api.openai.com`)
    ///
    /// `timeout` caps a single HTTP call. The batch deadline is enforced by
    /// the use case; this is a backstop for stuck connections.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OpenAiError::ClientBuild(e.to_string()))?;

        let endpoint = format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        );
        info!(endpoint = %endpoint, "OpenAiGateway initialized");

        Ok(Self { client, endpoint })
    }

    /// Full URL completion calls are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> Result<Vec<String>> {
        debug!(
            model = %request.model,
            key = %credential.hint(),
            "Sending chat completion"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential.expose())
            .json(&ChatRequest::from(request))
            .send()
            .await
            .map_err(OpenAiError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::status(status.as_u16(), &body));
        }

        let body: ChatResponse = response.json().await.map_err(OpenAiError::from_reqwest)?;
        let texts = body.into_texts();
        if texts.is_empty() {
            return Err(OpenAiError::NoChoices);
        }

        debug!(choices = texts.len(), "Chat completion received");
        Ok(texts)
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> std::result::Result<Vec<String>, GatewayError> {
        self.send(credential, request).await.map_err(GatewayError::from)
    }
}

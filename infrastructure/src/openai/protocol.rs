//! Wire types for `POST /v1/chat/completions`.
//!
//! Only the fields this service reads or writes are modelled; unknown
//! response fields are ignored.

use focus_domain::{CompletionRequest, Role};
use serde::{Deserialize, Serialize};

/// Request body
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for ChatRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: request.model.as_str(),
            messages: request
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role,
                    content: &m.content,
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

/// Response body
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    /// `null` when the model returned a refusal or tool call
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of every choice, in order; missing content becomes an empty string
    pub fn into_texts(self) -> Vec<String> {
        self.choices
            .into_iter()
            .map(|c| c.message.content.unwrap_or_default())
            .collect()
    }
}

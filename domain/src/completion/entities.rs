//! Completion domain entities

use crate::core::goal::Goal;
use crate::core::model::Model;
use crate::prompt::{PromptSettings, PromptTemplate};
use serde::{Deserialize, Serialize};

/// Role of a message in a chat completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A message sent to the completion API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// One chat-completion call (Entity)
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: Model,
    pub messages: Vec<Message>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(model: Model, messages: Vec<Message>) -> Self {
        Self {
            model,
            messages,
            max_tokens: None,
            temperature: None,
        }
    }

    /// System + user prompt pair for one goal
    pub fn for_goal(model: Model, goal: &Goal, settings: &PromptSettings) -> Self {
        Self::new(
            model,
            vec![
                Message::system(PromptTemplate::system(settings)),
                Message::user(PromptTemplate::user(goal, settings)),
            ],
        )
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_goal_builds_system_then_user() {
        let goal = Goal::try_new("beber mais água").unwrap();
        let request =
            CompletionRequest::for_goal(Model::default(), &goal, &PromptSettings::default());

        assert_eq!(request.model, Model::Gpt35Turbo);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[1].role, Role::User);
        assert!(request.messages[1].content.contains("beber mais água"));
        assert!(request.max_tokens.is_none());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(Message::system("hi")).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "hi");
    }
}

//! Goal value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A topic or ambition to generate motivational phrases for (Value Object)
///
/// The content is kept verbatim: it is interpolated into the user prompt
/// without any sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Goal {
    content: String,
}

impl Goal {
    /// Create a goal, rejecting empty or whitespace-only content
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyGoal)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the goal content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Goal {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Goal::try_new(s)
    }
}

impl TryFrom<&str> for Goal {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Goal::try_new(s)
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.content
    }
}

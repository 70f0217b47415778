//! Generation configuration from TOML (`[generation]` section)

use focus_domain::{Model, PhraseFormat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Completion model (default: "gpt-3.5-turbo").
    pub model: Model,
    /// Shared deadline for one request's batch of calls, in seconds.
    pub deadline_seconds: u64,
    /// Maximum goals accepted per request.
    pub max_goals: usize,
    /// Independent calls per goal (2 doubles the goal list).
    pub generations_per_goal: usize,
    /// Phrases requested from each call.
    pub phrases_per_goal: usize,
    /// Fallback language when the goal gives no hint.
    pub language: String,
    /// Output format requested from the model: "delimited" or "structured".
    pub format: PhraseFormat,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            deadline_seconds: 60,
            max_goals: 6,
            generations_per_goal: 1,
            phrases_per_goal: 20,
            language: "Portuguese".to_string(),
            format: PhraseFormat::Delimited,
        }
    }
}

//! Generation parameters: batch execution control.
//!
//! [`GenerationParams`] groups the static parameters that control how
//! [`GeneratePhrasesUseCase`](crate::use_cases::generate_phrases::GeneratePhrasesUseCase)
//! fans out completion calls. They are loaded once at startup.

use focus_domain::{Model, PromptSettings};
use std::time::Duration;

/// Batch execution parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Model used for every completion call.
    pub model: Model,
    /// Shared deadline for the whole batch.
    pub deadline: Duration,
    /// Prompt language, output format and phrase count.
    pub prompt: PromptSettings,
    /// Independent completion calls issued per goal.
    pub generations_per_goal: usize,
    /// Maximum number of goals accepted in one request.
    pub max_goals: usize,
    /// Optional `max_tokens` forwarded to the provider.
    pub max_tokens: Option<u32>,
    /// Optional sampling temperature forwarded to the provider.
    pub temperature: Option<f32>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            deadline: Duration::from_secs(60),
            prompt: PromptSettings::default(),
            generations_per_goal: 1,
            max_goals: 6,
            max_tokens: None,
            temperature: None,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_prompt(mut self, prompt: PromptSettings) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_generations_per_goal(mut self, count: usize) -> Self {
        self.generations_per_goal = count;
        self
    }

    pub fn with_max_goals(mut self, max: usize) -> Self {
        self.max_goals = max;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Number of completion calls a batch of `goal_count` goals will issue
    pub fn units_for(&self, goal_count: usize) -> usize {
        goal_count * self.generations_per_goal.max(1)
    }
}

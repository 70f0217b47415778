//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod logging;
mod openai;
mod server;

pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use openai::FileOpenAiConfig;
pub use server::FileServerConfig;

use focus_application::GenerationParams;
use focus_domain::PromptSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("generation.deadline_seconds cannot be 0")]
    InvalidDeadline,

    #[error("generation.max_goals cannot be 0")]
    InvalidGoalLimit,

    #[error("generation.generations_per_goal cannot be 0")]
    InvalidGenerations,

    #[error("generation.phrases_per_goal cannot be 0")]
    InvalidPhraseCount,

    #[error("generation.model cannot be empty")]
    EmptyModelName,

    #[error("no API credentials found: set {0} or {0}_1..{0}_N")]
    NoCredentials(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Listener settings
    pub server: FileServerConfig,
    /// Batch and prompt settings
    pub generation: FileGenerationConfig,
    /// Completion provider settings
    pub openai: FileOpenAiConfig,
    /// Transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the static configuration, returning every detected issue.
    ///
    /// Credentials are checked separately by [`FileConfig::require_credentials`]
    /// because they come from the environment.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        let generation = &self.generation;

        if generation.deadline_seconds == 0 {
            issues.push(ConfigValidationError::InvalidDeadline);
        }
        if generation.max_goals == 0 {
            issues.push(ConfigValidationError::InvalidGoalLimit);
        }
        if generation.generations_per_goal == 0 {
            issues.push(ConfigValidationError::InvalidGenerations);
        }
        if generation.phrases_per_goal == 0 {
            issues.push(ConfigValidationError::InvalidPhraseCount);
        }
        if generation.model.as_str().trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }

        issues
    }

    /// Resolve credentials, failing when none are configured
    pub fn require_credentials(
        &self,
    ) -> Result<Vec<focus_domain::Credential>, ConfigValidationError> {
        let credentials = self.openai.resolve_credentials();
        if credentials.is_empty() {
            return Err(ConfigValidationError::NoCredentials(
                self.openai.api_key_env.clone(),
            ));
        }
        Ok(credentials)
    }

    /// Build the application-level generation parameters
    pub fn generation_params(&self) -> GenerationParams {
        let generation = &self.generation;
        GenerationParams::default()
            .with_model(generation.model.clone())
            .with_deadline(Duration::from_secs(generation.deadline_seconds))
            .with_generations_per_goal(generation.generations_per_goal)
            .with_max_goals(generation.max_goals)
            .with_prompt(
                PromptSettings::default()
                    .with_language(generation.language.clone())
                    .with_format(generation.format)
                    .with_phrases_per_goal(generation.phrases_per_goal),
            )
            .with_max_tokens(self.openai.max_tokens)
            .with_temperature(self.openai.temperature)
    }

    /// Render the effective configuration as TOML (for `--show-config`)
    ///
    /// Explicit API keys are redacted.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        let mut redacted = self.clone();
        for key in &mut redacted.openai.api_keys {
            *key = "<redacted>".to_string();
        }
        toml::to_string_pretty(&redacted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };
    use focus_domain::{Model, PhraseFormat};

    fn parse(toml: &str) -> FileConfig {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::string(toml))
            .extract()
            .unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.generation.max_goals, 6);
        assert_eq!(config.generation.model, Model::Gpt35Turbo);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = parse(
            r#"
[server]
port = 9000

[generation]
format = "structured"
generations_per_goal = 2
"#,
        );
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.generation.format, PhraseFormat::Structured);
        assert_eq!(config.generation.generations_per_goal, 2);
        assert_eq!(config.generation.deadline_seconds, 60);
        assert_eq!(config.openai.api_key_env, "OPENAI_KEY");
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let config = parse(
            r#"
[generation]
deadline_seconds = 0
max_goals = 0
model = " "
"#,
        );
        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::InvalidDeadline,
                ConfigValidationError::InvalidGoalLimit,
                ConfigValidationError::EmptyModelName,
            ]
        );
    }

    #[test]
    fn test_generation_params_mapping() {
        let config = parse(
            r#"
[generation]
model = "gpt-4o-mini"
deadline_seconds = 270
phrases_per_goal = 10
language = "English"

[openai]
max_tokens = 800
"#,
        );
        let params = config.generation_params();
        assert_eq!(params.model, Model::Gpt4oMini);
        assert_eq!(params.deadline, Duration::from_secs(270));
        assert_eq!(params.prompt.phrases_per_goal, 10);
        assert_eq!(params.prompt.language, "English");
        assert_eq!(params.max_tokens, Some(800));
        assert_eq!(params.max_goals, 6);
    }

    #[test]
    fn test_to_toml_hides_empty_key_list() {
        let rendered = FileConfig::default().to_toml().unwrap();
        assert!(rendered.contains("[generation]"));
        assert!(rendered.contains("model = \"gpt-3.5-turbo\""));
        assert!(!rendered.contains("api_keys"));
    }

    #[test]
    fn test_to_toml_redacts_explicit_keys() {
        let config = parse(
            r#"
[openai]
api_keys = ["sk-live-secret"]
"#,
        );
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("sk-live-secret"));
    }
}

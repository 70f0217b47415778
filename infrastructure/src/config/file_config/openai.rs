//! OpenAI provider configuration from TOML (`[openai]` section)

use focus_domain::Credential;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Base URL for the API (any OpenAI-compatible endpoint works).
    pub base_url: String,
    /// Environment variable holding the key (default: "OPENAI_KEY").
    ///
    /// Numbered variants `OPENAI_KEY_1`, `OPENAI_KEY_2`, ... are tried first.
    pub api_key_env: String,
    /// How many numbered variables to probe (default: 6).
    pub key_slots: usize,
    /// Direct API keys (not recommended; prefer env vars).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub api_keys: Vec<String>,
    /// Optional max tokens per response.
    pub max_tokens: Option<u32>,
    /// Optional sampling temperature.
    pub temperature: Option<f32>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key_env: "OPENAI_KEY".to_string(),
            key_slots: 6,
            api_keys: Vec::new(),
            max_tokens: None,
            temperature: None,
        }
    }
}

impl FileOpenAiConfig {
    /// Resolve credentials from the process environment
    pub fn resolve_credentials(&self) -> Vec<Credential> {
        self.resolve_credentials_with(|name| std::env::var(name).ok())
    }

    /// Resolve credentials using `lookup` for environment variables
    ///
    /// Order of precedence:
    /// 1. `api_keys` from the config file
    /// 2. `{api_key_env}_1` ..= `{api_key_env}_{key_slots}`, in order
    /// 3. `{api_key_env}` alone
    ///
    /// Blank values are skipped.
    pub fn resolve_credentials_with<F>(&self, lookup: F) -> Vec<Credential>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit: Vec<Credential> = self
            .api_keys
            .iter()
            .filter_map(|k| Credential::try_new(k.as_str()).ok())
            .collect();
        if !explicit.is_empty() {
            if explicit.len() != self.api_keys.len() {
                warn!("Ignoring {} blank api_keys entries", self.api_keys.len() - explicit.len());
            }
            return explicit;
        }

        let numbered: Vec<Credential> = (1..=self.key_slots)
            .filter_map(|slot| lookup(&format!("{}_{}", self.api_key_env, slot)))
            .filter_map(|value| Credential::try_new(value).ok())
            .collect();
        if !numbered.is_empty() {
            debug!("Loaded {} numbered credentials from {}_N", numbered.len(), self.api_key_env);
            return numbered;
        }

        lookup(&self.api_key_env)
            .and_then(|value| Credential::try_new(value).ok())
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn exposed(credentials: &[Credential]) -> Vec<&str> {
        credentials.iter().map(|c| c.expose()).collect()
    }

    #[test]
    fn test_numbered_keys_in_slot_order() {
        let vars = env(&[
            ("OPENAI_KEY_2", "k2"),
            ("OPENAI_KEY_1", "k1"),
            ("OPENAI_KEY_6", "k6"),
            ("OPENAI_KEY_7", "ignored"),
            ("OPENAI_KEY", "single"),
        ]);
        let config = FileOpenAiConfig::default();
        let credentials = config.resolve_credentials_with(|name| vars.get(name).cloned());
        assert_eq!(exposed(&credentials), vec!["k1", "k2", "k6"]);
    }

    #[test]
    fn test_single_key_fallback() {
        let vars = env(&[("OPENAI_KEY", "single")]);
        let credentials =
            FileOpenAiConfig::default().resolve_credentials_with(|name| vars.get(name).cloned());
        assert_eq!(exposed(&credentials), vec!["single"]);
    }

    #[test]
    fn test_explicit_keys_win() {
        let vars = env(&[("OPENAI_KEY_1", "from-env")]);
        let config = FileOpenAiConfig {
            api_keys: vec!["a".to_string(), " ".to_string(), "b".to_string()],
            ..Default::default()
        };
        let credentials = config.resolve_credentials_with(|name| vars.get(name).cloned());
        assert_eq!(exposed(&credentials), vec!["a", "b"]);
    }

    #[test]
    fn test_custom_env_name_and_blank_values() {
        let vars = env(&[("GROQ_KEY_1", "  "), ("GROQ_KEY_2", "g2")]);
        let config = FileOpenAiConfig {
            api_key_env: "GROQ_KEY".to_string(),
            key_slots: 2,
            ..Default::default()
        };
        let credentials = config.resolve_credentials_with(|name| vars.get(name).cloned());
        assert_eq!(exposed(&credentials), vec!["g2"]);
    }

    #[test]
    fn test_no_credentials() {
        let credentials = FileOpenAiConfig::default().resolve_credentials_with(|_| None);
        assert!(credentials.is_empty());
    }
}

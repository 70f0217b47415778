//! Request and response bodies for the HTTP API

use focus_domain::Phrase;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Body of `POST /frases`
///
/// Either `goals` (multi-goal form) or `topic` (single-goal form).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhrasesRequest {
    #[serde(default)]
    pub goals: Option<Vec<String>>,
    #[serde(default)]
    pub topic: Option<String>,
}

impl PhrasesRequest {
    /// Collapse the two request forms into one goal list
    pub fn into_goals(self) -> Result<Vec<String>, ApiError> {
        match (self.goals, self.topic) {
            (Some(_), Some(_)) => Err(ApiError::Validation(
                "provide either goals or topic, not both".to_string(),
            )),
            (Some(goals), None) if goals.is_empty() => {
                Err(ApiError::Validation("goals must not be empty".to_string()))
            }
            (Some(goals), None) => Ok(goals),
            (None, Some(topic)) => Ok(vec![topic]),
            (None, None) => Err(ApiError::Validation("goals is required".to_string())),
        }
    }
}

/// Successful `POST /frases` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhrasesResponse {
    pub phrases: Vec<Phrase>,
}

/// `GET /health` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub credentials: usize,
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> PhrasesRequest {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_goals_form() {
        let goals = parse(r#"{"goals": ["run", "read"]}"#).into_goals().unwrap();
        assert_eq!(goals, vec!["run", "read"]);
    }

    #[test]
    fn test_topic_form() {
        let goals = parse(r#"{"topic": "learn rust"}"#).into_goals().unwrap();
        assert_eq!(goals, vec!["learn rust"]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let goals = parse(r#"{"goals": ["run"], "lang": "en"}"#)
            .into_goals()
            .unwrap();
        assert_eq!(goals, vec!["run"]);
    }

    #[test]
    fn test_missing_empty_and_ambiguous_bodies_are_rejected() {
        for raw in [
            "{}",
            r#"{"goals": []}"#,
            r#"{"goals": null}"#,
            r#"{"goals": ["a"], "topic": "b"}"#,
        ] {
            let err = parse(raw).into_goals().unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "{raw}");
        }
    }
}

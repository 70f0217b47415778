//! Route handlers

use axum::{Json, body::Bytes, extract::State};
use focus_application::{CompletionGateway, GeneratePhrasesInput};
use focus_domain::Goal;
use tracing::{info, warn};

use super::dto::{HealthResponse, PhrasesRequest, PhrasesResponse};
use super::error::ApiError;
use super::server::AppState;

/// `POST /frases`
///
/// Validation happens before any credential is drawn, so a rejected
/// request never reaches the provider.
pub async fn generate_phrases<G: CompletionGateway + 'static>(
    State(state): State<AppState<G>>,
    body: Bytes,
) -> Result<Json<PhrasesResponse>, ApiError> {
    let request: PhrasesRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::Validation(e.to_string()))?;
    let raw_goals = request.into_goals()?;

    let params = state.use_case.params();
    if raw_goals.len() > params.max_goals {
        warn!(
            goals = raw_goals.len(),
            max_goals = params.max_goals,
            "Rejecting request over the goal limit"
        );
        return Err(ApiError::LimitExceeded);
    }

    let goals = raw_goals
        .into_iter()
        .map(Goal::try_new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let units = params.units_for(goals.len());
    let credentials = state
        .keys
        .draw(units)
        .ok_or_else(|| ApiError::Internal("no API credentials configured".to_string()))?;

    info!(goals = goals.len(), units, "Generating phrases");

    let input = GeneratePhrasesInput::new(goals, credentials)
        .with_cancellation(state.shutdown.child_token());
    let output = state.use_case.execute(input).await?;

    Ok(Json(PhrasesResponse {
        phrases: output.into_phrases(),
    }))
}

/// `GET /health`
pub async fn health<G: CompletionGateway + 'static>(
    State(state): State<AppState<G>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        credentials: state.keys.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{MockGateway, state};
    use focus_application::GeneratePhrasesError;

    fn body(raw: &'static str) -> Bytes {
        Bytes::from_static(raw.as_bytes())
    }

    #[tokio::test]
    async fn test_returns_phrases_from_every_goal() {
        let state = state(MockGateway::replying("One; Two"), &["k1", "k2"], 1);

        let Json(response) =
            generate_phrases(State(state), body(r#"{"goals": ["run", "read"]}"#))
                .await
                .unwrap();

        assert_eq!(response.phrases.len(), 4);
    }

    #[tokio::test]
    async fn test_topic_form_is_one_goal() {
        let gateway = MockGateway::replying("Only");
        let calls = gateway.calls();
        let state = state(gateway, &["k1", "k2"], 1);

        let Json(response) = generate_phrases(State(state), body(r#"{"topic": "focus"}"#))
            .await
            .unwrap();

        assert_eq!(response.phrases.len(), 1);
        assert_eq!(calls.lock().unwrap().as_slice(), ["k1"]);
    }

    #[tokio::test]
    async fn test_over_limit_never_calls_gateway() {
        let gateway = MockGateway::replying("x");
        let calls = gateway.calls();
        let state = state(gateway, &["k1"], 1);

        let err = generate_phrases(
            State(state),
            body(r#"{"goals": ["1", "2", "3", "4", "5", "6", "7"]}"#),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::LimitExceeded));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_limit_applies_before_doubling() {
        let gateway = MockGateway::replying("x");
        let calls = gateway.calls();
        let state = state(gateway, &["k1", "k2", "k3"], 2);

        let result = generate_phrases(
            State(state),
            body(r#"{"goals": ["1", "2", "3", "4", "5", "6"]}"#),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(calls.lock().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_generations_draw_one_key_per_unit() {
        let gateway = MockGateway::replying("x");
        let calls = gateway.calls();
        let state = state(gateway, &["k1", "k2", "k3"], 2);

        let Json(first) =
            generate_phrases(State(state.clone()), body(r#"{"goals": ["run"]}"#))
                .await
                .unwrap();
        let Json(second) = generate_phrases(State(state), body(r#"{"goals": ["run"]}"#))
            .await
            .unwrap();
        assert_eq!(first.phrases.len(), 2);
        assert_eq!(second.phrases.len(), 2);

        let mut first_batch = calls.lock().unwrap()[..2].to_vec();
        first_batch.sort();
        assert_eq!(first_batch, ["k1", "k2"]);
        let mut second_batch = calls.lock().unwrap()[2..].to_vec();
        second_batch.sort();
        assert_eq!(second_batch, ["k1", "k3"]);
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let state = state(MockGateway::replying("x"), &["k1"], 1);
        let err = generate_phrases(State(state), body("{\"goals\": ["))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_blank_goal_is_validation_error() {
        let gateway = MockGateway::replying("x");
        let calls = gateway.calls();
        let state = state(gateway, &["k1"], 1);

        let err = generate_phrases(State(state), body(r#"{"goals": ["run", "   "]}"#))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_every_call_failing_is_internal_error() {
        let state = state(MockGateway::failing(), &["k1", "k2"], 1);
        let err = generate_phrases(State(state), body(r#"{"goals": ["a", "b"]}"#))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApiError::Generation(GeneratePhrasesError::NoPhrasesGenerated)
        ));
        assert_eq!(err.to_string(), "no phrases generated");
    }

    #[tokio::test]
    async fn test_empty_pool_is_internal_error() {
        let state = state(MockGateway::replying("x"), &[], 1);
        let err = generate_phrases(State(state), body(r#"{"topic": "run"}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[tokio::test]
    async fn test_health_reports_pool_size() {
        let state = state(MockGateway::replying("x"), &["k1", "k2"], 1);
        let Json(response) = health(State(state)).await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.credentials, 2);
    }
}

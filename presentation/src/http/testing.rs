//! Test doubles shared by the HTTP tests

use async_trait::async_trait;
use focus_application::{
    CompletionGateway, GatewayError, GeneratePhrasesUseCase, GenerationParams,
};
use focus_domain::{CompletionRequest, Credential};
use std::sync::{Arc, Mutex};

use super::key_pool::KeyPool;
use super::server::AppState;

/// Gateway that answers every call with the same text (or fails)
pub struct MockGateway {
    reply: Option<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGateway {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Arc::default(),
        }
    }

    /// Secrets of the credentials used, in call order
    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl CompletionGateway for MockGateway {
    async fn complete(
        &self,
        credential: &Credential,
        _request: &CompletionRequest,
    ) -> Result<Vec<String>, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push(credential.expose().to_string());
        match &self.reply {
            Some(text) => Ok(vec![text.clone()]),
            None => Err(GatewayError::RequestFailed("HTTP 500: upstream".to_string())),
        }
    }
}

pub fn state(gateway: MockGateway, keys: &[&str], generations: usize) -> AppState<MockGateway> {
    let params = GenerationParams::default().with_generations_per_goal(generations);
    let use_case = GeneratePhrasesUseCase::new(Arc::new(gateway), params);
    let pool = KeyPool::new(keys.iter().map(|k| Credential::try_new(*k).unwrap()));
    AppState::new(use_case, pool)
}

//! Router assembly and the serve loop

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use focus_application::{CompletionGateway, GeneratePhrasesUseCase};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::cors::cors;
use super::dto::ErrorBody;
use super::handlers;
use super::key_pool::KeyPool;

/// State shared by every request
pub struct AppState<G: CompletionGateway + 'static> {
    pub use_case: Arc<GeneratePhrasesUseCase<G>>,
    pub keys: Arc<KeyPool>,
    /// Cancelled on shutdown; each batch runs under a child token
    pub shutdown: CancellationToken,
}

impl<G: CompletionGateway + 'static> AppState<G> {
    pub fn new(use_case: GeneratePhrasesUseCase<G>, keys: KeyPool) -> Self {
        Self {
            use_case: Arc::new(use_case),
            keys: Arc::new(keys),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_shutdown(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }
}

impl<G: CompletionGateway + 'static> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            use_case: Arc::clone(&self.use_case),
            keys: Arc::clone(&self.keys),
            shutdown: self.shutdown.clone(),
        }
    }
}

/// Build the application router with CORS applied to every route
pub fn router<G: CompletionGateway + 'static>(state: AppState<G>) -> Router {
    Router::new()
        .route("/frases", post(handlers::generate_phrases::<G>))
        .route("/health", get(handlers::health::<G>))
        .fallback(not_found)
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "not found".to_string(),
        }),
    )
}

/// Serve until the state's shutdown token is cancelled
///
/// In-flight batches are cancelled with the token and answer with the
/// phrases collected so far.
pub async fn serve<G: CompletionGateway + 'static>(
    listener: TcpListener,
    state: AppState<G>,
) -> std::io::Result<()> {
    let shutdown = state.shutdown.clone();
    let addr = listener.local_addr()?;
    info!(%addr, credentials = state.keys.len(), "Serving POST /frases");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Server stopped");
    Ok(())
}

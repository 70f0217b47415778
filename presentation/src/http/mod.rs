//! HTTP surface: `POST /frases` and `GET /health`

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod key_pool;
pub mod server;

#[cfg(test)]
mod testing;

pub use dto::{ErrorBody, HealthResponse, PhrasesRequest, PhrasesResponse};
pub use error::ApiError;
pub use key_pool::KeyPool;
pub use server::{AppState, router, serve};

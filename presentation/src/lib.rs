//! Presentation layer for focus-api
//!
//! This crate contains the CLI definition and the HTTP surface
//! (router, handlers, CORS and the credential key pool).

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{
    ApiError, AppState, KeyPool, PhrasesRequest, PhrasesResponse, router, serve,
};

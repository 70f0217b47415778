//! OpenAI chat-completions adapter
//!
//! Implements the [`CompletionGateway`](focus_application::CompletionGateway)
//! port over HTTPS with `reqwest`. One client is shared by every call; the
//! credential travels with each request so the key rotation stays outside
//! this adapter.

pub mod error;
pub mod gateway;
pub mod protocol;

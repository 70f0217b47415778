//! Completion domain.
//!
//! - [`entities::Message`]: one role-tagged message
//! - [`entities::CompletionRequest`]: everything one outbound call carries

pub mod entities;

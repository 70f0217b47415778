//! Domain layer for focus-api
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Goal**: a topic the caller wants motivational phrases for
//! - **Credential**: an API key, cycled round robin through a [`RotationQueue`]
//! - **Phrase**: one sentence extracted from a model response
//!
//! A request fans out one completion call per goal; the raw texts are turned
//! into phrases by [`extract_phrases`] according to the configured
//! [`PhraseFormat`].

pub mod completion;
pub mod core;
pub mod phrase;
pub mod prompt;
pub mod rotation;

// Re-export commonly used types
pub use completion::entities::{CompletionRequest, Message, Role};
pub use core::{
    credential::Credential, error::DomainError, goal::Goal, model::Model, string::preview,
};
pub use phrase::{Phrase, PhraseFormat, extract_phrases, parse_structured, split_delimited};
pub use prompt::{PromptSettings, PromptTemplate};
pub use rotation::RotationQueue;

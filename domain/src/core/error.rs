//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("goal cannot be empty")]
    EmptyGoal,

    #[error("credential cannot be empty")]
    EmptyCredential,

    #[error("malformed phrase list: {0}")]
    MalformedPhraseList(String),
}

//! Core domain concepts shared across all subdomains.
//!
//! - [`goal::Goal`]: a validated topic to generate phrases for
//! - [`credential::Credential`]: an opaque API key
//! - [`model::Model`]: chat-completion model identifiers
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod error;
pub mod goal;
pub mod model;
pub mod string;

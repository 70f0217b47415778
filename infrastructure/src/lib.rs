//! Infrastructure layer for focus-api
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGenerationConfig, FileLoggingConfig,
    FileOpenAiConfig, FileServerConfig,
};
pub use logging::JsonlGenerationLogger;
pub use openai::{
    error::{OpenAiError, Result},
    gateway::OpenAiGateway,
};

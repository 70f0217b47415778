//! Application layer for focus-api
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError},
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
};
pub use use_cases::generate_phrases::{
    GeneratePhrasesError, GeneratePhrasesInput, GeneratePhrasesOutput, GeneratePhrasesUseCase,
    UnitOutcome, UnitStatus,
};

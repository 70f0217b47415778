//! Application-level configuration.
//!
//! - [`GenerationParams`]: how a phrase-generation batch is executed

pub mod generation_params;

pub use generation_params::GenerationParams;

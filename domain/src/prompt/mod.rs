//! Prompt domain
//!
//! Templates for the two messages sent with every completion call.

mod template;

pub use template::{PromptSettings, PromptTemplate};

//! Phrase domain
//!
//! The unit returned to callers, the output formats a model can be asked
//! for, and the post-processing that turns raw model text into phrases.

mod format;
mod parsing;

pub use format::PhraseFormat;
pub use parsing::{extract_phrases, parse_structured, split_delimited};

use serde::{Deserialize, Serialize};

/// A single motivational sentence, trimmed of quotes and whitespace (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phrase(String);

impl Phrase {
    /// Build a phrase from a raw fragment, `None` if nothing remains after trimming
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let cleaned = fragment.trim().trim_matches('"').trim();
        if cleaned.is_empty() {
            None
        } else {
            Some(Self(cleaned.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

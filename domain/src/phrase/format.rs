//! Phrase output format value object

use serde::{Deserialize, Serialize};

/// Format the model is instructed to answer in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseFormat {
    /// Phrases separated by semicolons on a single line (default)
    Delimited,
    /// A JSON array of `{"phrase": "..."}` records
    Structured,
}

impl PhraseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseFormat::Delimited => "delimited",
            PhraseFormat::Structured => "structured",
        }
    }
}

impl Default for PhraseFormat {
    fn default() -> Self {
        Self::Delimited
    }
}

impl std::fmt::Display for PhraseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PhraseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delimited" => Ok(PhraseFormat::Delimited),
            "structured" => Ok(PhraseFormat::Structured),
            other => Err(format!("unknown phrase format: {}", other)),
        }
    }
}

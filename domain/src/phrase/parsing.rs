//! Phrase extraction from model responses.
//!
//! Two formats are understood, matching [`PhraseFormat`]:
//! 1. Semicolon-delimited text (`"first;second;third"`)
//! 2. A JSON array of phrase records, either raw or inside a fenced block

use super::{Phrase, PhraseFormat};
use crate::core::error::DomainError;

/// Turn one raw response text into phrases according to `format`
pub fn extract_phrases(raw: &str, format: PhraseFormat) -> Result<Vec<Phrase>, DomainError> {
    match format {
        PhraseFormat::Delimited => Ok(split_delimited(raw)),
        PhraseFormat::Structured => parse_structured(raw),
    }
}

/// Split on `;`, strip surrounding quotes and whitespace, drop empty pieces
pub fn split_delimited(raw: &str) -> Vec<Phrase> {
    raw.split(';').filter_map(Phrase::from_fragment).collect()
}

/// Parse a JSON array of phrase records
///
/// Each element may be an object with a `phrase` field or a bare string.
/// Elements that carry no usable text are skipped; anything that is not a
/// JSON array is an error.
pub fn parse_structured(raw: &str) -> Result<Vec<Phrase>, DomainError> {
    let body = fenced_block(raw).unwrap_or(raw).trim();

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| DomainError::MalformedPhraseList(e.to_string()))?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        // Some models wrap the list: {"phrases": [...]}
        serde_json::Value::Object(mut map) => match map.remove("phrases") {
            Some(serde_json::Value::Array(items)) => items,
            _ => {
                return Err(DomainError::MalformedPhraseList(
                    "expected a JSON array".to_string(),
                ));
            }
        },
        _ => {
            return Err(DomainError::MalformedPhraseList(
                "expected a JSON array".to_string(),
            ));
        }
    };

    Ok(items
        .iter()
        .filter_map(record_text)
        .filter_map(Phrase::from_fragment)
        .collect())
}

fn record_text(value: &serde_json::Value) -> Option<&str> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Object(map) => map.get("phrase").and_then(|v| v.as_str()),
        _ => None,
    }
}

/// Content of the first ```` ``` ```` fenced block, with or without a language tag
fn fenced_block(raw: &str) -> Option<&str> {
    let start = raw.find("```")?;
    let after_fence = &raw[start + 3..];
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let end = body.find("```")?;
    Some(&body[..end])
}

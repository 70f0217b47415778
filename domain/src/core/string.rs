//! String utilities for the domain layer.

/// Single-line preview of model output for log messages
///
/// Collapses every run of whitespace (newlines included) into one space and
/// cuts the result at `max_chars` characters, appending `...` when cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let kept: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

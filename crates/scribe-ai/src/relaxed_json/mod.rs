//! Tolerant JSON parsing for model-generated chart payloads.
//!
//! Models often answer with near-JSON: fenced in markdown, keys left
//! unquoted, strings in single quotes, trailing commas. This module accepts
//! that JSON5-style subset and fails closed on anything else.

mod fences;
mod parser;

#[cfg(test)]
mod tests;

pub use fences::strip_fences;
pub use parser::parse;

/// A parse failure with the position where it was detected (1-based).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {line}, column {column}")]
pub struct RelaxedJsonError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Strip fences from raw model output and parse what remains.
pub fn parse_output(raw: &str) -> Result<serde_json::Value, RelaxedJsonError> {
    parse(&strip_fences(raw))
}

/// Canonical strict JSON for raw model output.
///
/// Strict JSON is a subset of what [`parse`] accepts, so normalizing an
/// already-normalized string returns it unchanged.
pub fn normalize(raw: &str) -> Result<String, RelaxedJsonError> {
    parse_output(raw).map(|value| value.to_string())
}

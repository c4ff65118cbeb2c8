//! Text validation for pasted or loaded JSON documents

use serde_json::Value;

use crate::error::JshapeError;

/// Parse raw text into a JSON value
///
/// Empty or whitespace-only input is rejected up front with its own error
/// so callers can prompt for input instead of showing a parse failure.
/// Syntax failures carry the parser's message and position.
pub fn parse_document(text: &str) -> Result<Value, JshapeError> {
    if text.trim().is_empty() {
        return Err(JshapeError::EmptyInput);
    }

    let value = serde_json::from_str(text)?;
    Ok(value)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;

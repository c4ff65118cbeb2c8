//! Re-serialization of parsed documents for display and download

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::Value;

/// Pretty-print a parsed document
///
/// Key order matches the input document, so parsing the result yields the
/// original value back.
pub fn to_pretty_json(value: &Value) -> String {
    format!("{value:#}")
}

/// Encode a parsed document as a `data:` URI for download links
///
/// Format: data:application/json;base64,{base64}
///
/// The pretty-printed document is base64-encoded so the URI survives being
/// embedded in markup. Rendering an actual anchor around it is left to the
/// presentation layer.
pub fn download_data_uri(value: &Value) -> String {
    let pretty = to_pretty_json(value);
    format!("data:application/json;base64,{}", STANDARD.encode(pretty))
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;

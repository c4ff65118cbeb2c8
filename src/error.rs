use thiserror::Error;

/// Failures from the ingestion layer (text validation and URL fetching).
///
/// Every variant renders a message fit for direct display. The analysis
/// functions themselves never fail: malformed input is rejected here,
/// before a parsed value ever reaches them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JshapeError {
    #[error("Empty input. Please enter some JSON data.")]
    EmptyInput,

    /// The text did not parse as JSON. `message` carries the parser's own
    /// description, which already names the offending position; `line` and
    /// `column` repeat it for callers that want to highlight the spot.
    #[error("Invalid JSON: {message}")]
    MalformedSyntax {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Request timed out. The server took too long to respond.")]
    Timeout,

    #[error("Connection error. Please check your internet connection and the URL.")]
    ConnectionFailure,

    #[error("HTTP Error {0}: The server returned an error. Please check the URL.")]
    HttpStatus(u16),

    #[error("Error fetching data: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for JshapeError {
    fn from(err: serde_json::Error) -> Self {
        JshapeError::MalformedSyntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

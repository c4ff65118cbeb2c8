//! HTTP retrieval of remote JSON documents

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;

use crate::error::JshapeError;

/// Bound on the whole request, connect through body read
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Some APIs reject requests with no User-Agent, so always send one
const FETCH_USER_AGENT: &str = concat!("jshape/", env!("CARGO_PKG_VERSION"));

/// Fetch a URL and parse the response body as JSON
///
/// The response's declared Content-Type is ignored: plenty of endpoints
/// serve JSON as `text/plain` or `text/javascript`, so the body is parsed
/// regardless and only an actual parse failure is reported as one.
pub fn fetch_document(url: &str) -> Result<Value, JshapeError> {
    fetch_document_with_timeout(url, FETCH_TIMEOUT)
}

pub(crate) fn fetch_document_with_timeout(
    url: &str,
    timeout: Duration,
) -> Result<Value, JshapeError> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| JshapeError::Transport(e.to_string()))?;

    #[cfg(debug_assertions)]
    log::debug!("GET {url}");

    let response = client
        .get(url)
        .header(USER_AGENT, FETCH_USER_AGENT)
        .header(ACCEPT, "application/json")
        .send()
        .map_err(map_request_error)?
        .error_for_status()
        .map_err(map_request_error)?;

    let body = response.text().map_err(map_request_error)?;

    #[cfg(debug_assertions)]
    log::debug!("received {} bytes from {url}", body.len());

    let value = serde_json::from_str(&body)?;
    Ok(value)
}

/// Map a transport-level failure onto the display taxonomy
///
/// Timeout is checked first: a timed-out connect would otherwise report as
/// a connection failure.
fn map_request_error(err: reqwest::Error) -> JshapeError {
    if err.is_timeout() {
        JshapeError::Timeout
    } else if err.is_connect() {
        JshapeError::ConnectionFailure
    } else if let Some(status) = err.status() {
        JshapeError::HttpStatus(status.as_u16())
    } else {
        JshapeError::Transport(err.to_string())
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod fetch_tests;

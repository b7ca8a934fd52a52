//! Failure classification for API calls
//!
//! Every request made by [`crate::api::GeminiClient`] resolves to either a
//! result or one of these variants. Nothing panics past the client boundary.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS, timeout or body-read failure.
    #[error("Request failed: {0}")]
    Network(reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not valid JSON.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Valid JSON without any candidate.
    #[error("No content generated{}", block_suffix(.block_reason.as_deref()))]
    NoContent {
        block_reason: Option<String>,
        raw: Value,
    },

    /// A candidate was present but not shaped as expected.
    #[error("Invalid response structure: missing {missing}")]
    InvalidStructure { missing: &'static str, raw: Value },
}

fn block_suffix(reason: Option<&str>) -> String {
    reason
        .map(|reason| format!(" (prompt blocked: {reason})"))
        .unwrap_or_default()
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key as a query parameter.
        ApiError::Network(err.without_url())
    }
}

impl ApiError {
    pub fn http(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            message: summarize_error_body(body),
        }
    }

    /// Short tag used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "network",
            ApiError::Http { .. } => "http",
            ApiError::Decode(_) => "decode",
            ApiError::NoContent { .. } => "no_content",
            ApiError::InvalidStructure { .. } => "invalid_structure",
        }
    }

    /// The decoded payload, for failures that got as far as parsing one.
    pub fn raw_payload(&self) -> Option<&Value> {
        match self {
            ApiError::NoContent { raw, .. } | ApiError::InvalidStructure { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

fn extract_error_summary(value: &Value) -> Option<String> {
    let message = value
        .pointer("/error/message")
        .and_then(Value::as_str)
        .or_else(|| value.get("error").and_then(Value::as_str))
        .or_else(|| value.get("message").and_then(Value::as_str))?;

    let collapsed = message.split_whitespace().collect::<Vec<_>>().join(" ");
    match value.pointer("/error/status").and_then(Value::as_str) {
        Some(status) if !status.is_empty() => Some(format!("{collapsed} ({status})")),
        _ => Some(collapsed),
    }
}

/// Reduces an error response body to one displayable line.
pub fn summarize_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if let Some(summary) = extract_error_summary(&value) {
            if !summary.is_empty() {
                return summary;
            }
        }
    }

    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

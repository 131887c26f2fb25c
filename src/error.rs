//! Error types for tradewalk
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! The retry layer relies on the split between transient failures
//! (retried with the same cursor) and terminal ones (surfaced at once):
//! see [`Error::is_transient`].

use thiserror::Error;

/// The main error type for tradewalk
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Fetch Outcomes
    // ============================================================================
    /// Response arrived but its body is not a valid trade page.
    /// Never retried: a parse failure cannot be fixed by asking again.
    #[error("Malformed response: {message}")]
    Malformed { message: String },

    /// The retry budget ran out. Carries the cursor the fetch failed at and
    /// the number of attempts made, so a walk can be resumed manually.
    #[error("Retries exhausted after {attempts} attempt(s) at tid {cursor}: {source}")]
    RetriesExhausted {
        cursor: u64,
        attempts: u32,
        #[source]
        source: Box<Error>,
    },

    // ============================================================================
    // Encoding / I/O Errors
    // ============================================================================
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Check if this error is transient, i.e. worth retrying with the
    /// same cursor. Parse failures and client errors are not: the next
    /// attempt would fail the same way.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Http(_) | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is worth retrying
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for tradewalk
pub type Result<T> = std::result::Result<T, Error>;

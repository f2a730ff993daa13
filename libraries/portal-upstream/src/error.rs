//! Error types for the upstream clients.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when calling an upstream service.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream error ({status})")]
    Status {
        status: u16,
        /// Response body, as JSON when it parses, else as a string
        body: Option<Value>,
    },

    /// The per-call timeout elapsed
    #[error("Upstream timed out: {0}")]
    Timeout(String),

    /// Upstream is offline or unreachable
    #[error("Upstream unreachable: {0}")]
    Unreachable(String),

    /// Invalid upstream base URL
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse an upstream response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl UpstreamError {
    /// Status reported by the upstream, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Body reported by the upstream, if it sent one
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_connect() {
            Self::Unreachable(e.to_string())
        } else {
            Self::Request(e)
        }
    }
}

/// Result type for upstream operations.
pub type Result<T> = std::result::Result<T, UpstreamError>;

//! Client configuration and pass-through response types.

use portal_core::UpstreamBases;
use serde_json::Value;
use std::time::Duration;

/// Default per-call timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Default timeout for long-running social routes
pub const DEFAULT_SOCIAL_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Configuration for connecting to the upstream services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Base URL of every upstream service
    pub bases: UpstreamBases,
    /// Timeout of an ordinary call
    pub timeout: Duration,
    /// Timeout of long-running social calls
    pub social_timeout: Duration,
}

impl UpstreamConfig {
    /// Configuration with default timeouts
    pub fn new(bases: UpstreamBases) -> Self {
        Self {
            bases,
            timeout: DEFAULT_TIMEOUT,
            social_timeout: DEFAULT_SOCIAL_TIMEOUT,
        }
    }

    /// Override both timeouts
    pub fn with_timeouts(mut self, timeout: Duration, social_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.social_timeout = social_timeout;
        self
    }
}

/// A successful upstream answer relayed to the caller as-is
#[derive(Debug, Clone, PartialEq)]
pub struct Forwarded {
    /// Upstream status code
    pub status: u16,
    /// Upstream body; `None` when empty
    pub body: Option<Value>,
}

/// Response to a shared playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedPlaylistAction {
    Accept,
    Reject,
}

impl SharedPlaylistAction {
    /// Path segment used by the playlist service
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
        }
    }
}

/// File sent to the content platform's artifact store
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

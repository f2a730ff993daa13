/// Shared application state
use crate::services::{SessionStore, TokenVerifier};
use portal_upstream::PortalClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub upstream: PortalClient,
    pub verifier: Arc<TokenVerifier>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(
        upstream: PortalClient,
        verifier: Arc<TokenVerifier>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            upstream,
            verifier,
            sessions,
        }
    }
}

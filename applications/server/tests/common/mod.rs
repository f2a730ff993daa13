/// Common test utilities and fixtures
use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use portal_core::{TokenClaims, UpstreamBases};
use portal_server::{create_router, AppState, SessionStore, TokenVerifier};
use portal_upstream::{PortalClient, UpstreamConfig};
use serde_json::Value;
use std::sync::Arc;
use wiremock::MockServer;

pub const TEST_SECRET: &str = "test-secret-key";
pub const ORG: &str = "org-1";
pub const ROOT_ORG: &str = "root-1";

/// Router wired to a mock upstream serving every service
pub struct TestApp {
    pub router: Router,
    pub upstream: MockServer,
    pub sessions: Arc<SessionStore>,
}

pub async fn create_test_app() -> TestApp {
    let upstream = MockServer::start().await;
    let client = PortalClient::new(UpstreamConfig::new(UpstreamBases::single_host(upstream.uri()))).unwrap();
    let sessions = Arc::new(SessionStore::in_memory(3600));

    let state = AppState::new(
        client,
        Arc::new(TokenVerifier::shared_secret(TEST_SECRET)),
        Arc::clone(&sessions),
    );

    TestApp {
        router: create_router(state),
        upstream,
        sessions,
    }
}

/// HS256 token for `sub`, valid for an hour
pub fn token_for(sub: &str, session_state: Option<&str>) -> String {
    let claims = TokenClaims {
        sub: Some(sub.to_string()),
        name: Some("Test User".to_string()),
        email: Some(format!("{}@example.com", sub)),
        session_state: session_state.map(str::to_string),
        exp: Some(chrono::Utc::now().timestamp() + 3600),
        ..TokenClaims::default()
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Request builder carrying both tenant headers
pub fn tenant_request(method: &str, uri: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("org", ORG)
        .header("rootOrg", ROOT_ORG)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

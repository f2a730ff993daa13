/// Token handling tests
/// Drives the router with each verification mode against a mock upstream
mod common;

use axum::{
    body::Body,
    http::{header, StatusCode},
};
use common::{body_json, tenant_request};
use jsonwebtoken::{encode, EncodingKey, Header};
use portal_core::{TokenClaims, UpstreamBases};
use portal_server::{
    config::AuthSettings, create_router, services::VerificationMode, AppState, SessionStore,
    TokenVerifier,
};
use portal_upstream::{PortalClient, UpstreamConfig};
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn signed_with(secret: &str, claims: &TokenClaims) -> String {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

async fn app_with(verifier: TokenVerifier, upstream: &MockServer) -> axum::Router {
    let client = PortalClient::new(UpstreamConfig::new(UpstreamBases::single_host(upstream.uri()))).unwrap();
    create_router(AppState::new(
        client,
        Arc::new(verifier),
        Arc::new(SessionStore::in_memory(60)),
    ))
}

#[test]
fn test_mode_follows_settings() {
    let none = AuthSettings::default();
    assert_eq!(
        TokenVerifier::from_settings(&none).unwrap().mode(),
        VerificationMode::Unverified
    );

    let secret = AuthSettings {
        jwt_secret: Some("s".to_string()),
        jwt_public_key: None,
    };
    assert_eq!(
        TokenVerifier::from_settings(&secret).unwrap().mode(),
        VerificationMode::SharedSecret
    );

    let bad_key = AuthSettings {
        jwt_secret: None,
        jwt_public_key: Some("not a pem".to_string()),
    };
    assert!(TokenVerifier::from_settings(&bad_key).is_err());
}

#[tokio::test]
async fn test_unverified_mode_reads_claims_of_any_signature() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/idp-user/goals/common"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&upstream)
        .await;

    let claims = TokenClaims {
        sub: Some("idp-user".to_string()),
        ..TokenClaims::default()
    };
    let token = signed_with("whatever-the-idp-used", &claims);

    let router = app_with(TokenVerifier::unverified(), &upstream).await;
    let request = tenant_request("GET", "/protected/v8/user/goals/common")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_shared_secret_mode_rejects_foreign_signature() {
    let upstream = MockServer::start().await;

    let claims = TokenClaims {
        sub: Some("u1".to_string()),
        exp: Some(chrono::Utc::now().timestamp() + 600),
        ..TokenClaims::default()
    };
    let token = signed_with("someone-else", &claims);

    let router = app_with(TokenVerifier::shared_secret(common::TEST_SECRET), &upstream).await;
    let request = tenant_request("GET", "/protected/v8/user/goals/common")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "Invalid token" }));
}

#[tokio::test]
async fn test_public_routes_ignore_tokens() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/latest/terms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "termsAndConditions": [] })))
        .mount(&upstream)
        .await;

    let router = app_with(TokenVerifier::shared_secret(common::TEST_SECRET), &upstream).await;
    let request = tenant_request("GET", "/public/v8/tnc")
        .header(header::AUTHORIZATION, "Bearer garbage")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

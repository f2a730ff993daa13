//! Tests for the upstream clients.
//!
//! These tests use mock servers to verify request shapes and error
//! mapping without real upstream services.

use portal_core::aggregate;
use portal_core::social;
use portal_core::{TenantContext, UpstreamBases, UserId};
use portal_upstream::{
    Artifact, PortalClient, SharedPlaylistAction, UpstreamConfig, UpstreamError,
};
use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PortalClient {
    PortalClient::new(UpstreamConfig::new(UpstreamBases::single_host(server.uri()))).unwrap()
}

fn tenant() -> TenantContext {
    TenantContext::new("org-1", "root-1")
}

fn user() -> UserId {
    UserId::new("u1")
}

// =============================================================================
// Request Shape Tests
// =============================================================================

mod request_shape {
    use super::*;

    #[tokio::test]
    async fn test_tenant_headers_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/users/u1/playlists"))
            .and(header("org", "org-1"))
            .and(header("rootOrg", "root-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "playlist_id": "p1", "playlist_title": "Mine", "shared_by": null }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let playlists = client_for(&server)
            .playlists()
            .owned(&user(), &tenant())
            .await
            .unwrap();

        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].playlist_id.as_deref(), Some("p1"));
    }

    #[tokio::test]
    async fn test_connections_send_wid_and_page_size() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/user/connections/u1/Active"))
            .and(header("wid", "u1"))
            .and(query_param("size", "10000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{ "connected_to": "u2", "connection_id": "c1", "email": "b@x.io" }]
            })))
            .mount(&server)
            .await;

        let active = client_for(&server)
            .connections()
            .active(&user(), &tenant())
            .await
            .unwrap();

        assert_eq!(active[0].connected_to, "u2");
    }

    #[tokio::test]
    async fn test_remove_contents_uses_delete_with_body() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/users/u1/playlists/p1/contents"))
            .and(body_json(json!({ "content": ["c1"] })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let forwarded = client_for(&server)
            .playlists()
            .remove_contents(
                &user(),
                &tenant(),
                "p1",
                &portal_core::types::UpstreamRemoveContents {
                    content: vec!["c1".to_string()],
                },
            )
            .await
            .unwrap();

        assert_eq!(forwarded.status, 204);
        assert!(forwarded.body.is_none());
    }

    #[tokio::test]
    async fn test_shared_playlist_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/users/u1/shared-playlists/p9/reject"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let forwarded = client_for(&server)
            .playlists()
            .respond(&user(), &tenant(), "p9", SharedPlaylistAction::Reject)
            .await
            .unwrap();

        assert_eq!(forwarded.status, 200);
    }

    #[tokio::test]
    async fn test_user_terms_send_language() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/latest/terms"))
            .and(query_param("userId", "u1"))
            .and(header("langCode", "de"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "isAccepted": true,
                "termsAndConditions": []
            })))
            .mount(&server)
            .await;

        let terms = client_for(&server)
            .terms()
            .for_user(&user(), &tenant(), "de")
            .await
            .unwrap();

        assert_eq!(terms.is_accepted, Some(true));
    }
}

// =============================================================================
// Error Mapping Tests
// =============================================================================

mod error_mapping {
    use super::*;

    #[tokio::test]
    async fn test_status_and_json_body_preserved() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/users/u1/playlists/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "no such playlist" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .playlists()
            .detail(&user(), &tenant(), "missing")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some(&json!({ "message": "no such playlist" })));
    }

    #[tokio::test]
    async fn test_text_body_kept_as_string() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/users/u1/goals"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .goals()
            .user_goals(&user(), &tenant())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert_eq!(err.body(), Some(&json!("maintenance")));
    }

    #[tokio::test]
    async fn test_unparseable_success_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/users/u1/shared-playlist"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .playlists()
            .pending(&user(), &tenant())
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/latest/terms"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = UpstreamConfig::new(UpstreamBases::single_host(server.uri()))
            .with_timeouts(Duration::from_millis(100), Duration::from_millis(100));
        let err = PortalClient::new(config)
            .unwrap()
            .terms()
            .common(&tenant())
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Timeout(_)));
    }
}

// =============================================================================
// Aggregation Tests
// =============================================================================

mod aggregation {
    use super::*;

    #[tokio::test]
    async fn test_pending_failure_fails_connection_merge() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/user/connections/u1/Active"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [
                    { "connected_to": "u2", "connection_id": "c1" },
                    { "connected_to": "u3", "connection_id": "c2" }
                ]
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/user/connection/pending-requests/u1"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "db down" })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = aggregate::merge_connections(&client.connections(), &user(), &tenant())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(err.body(), Some(&json!({ "error": "db down" })));
    }

    #[tokio::test]
    async fn test_terms_fall_back_to_common() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/latest/terms"))
            .and(query_param("userId", "u1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/latest/terms"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "isAccepted": false,
                "termsAndConditions": [{ "acceptedVersion": "1.0" }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let record = aggregate::terms_with_fallback(&client.terms(), &user(), &tenant(), "en")
            .await
            .unwrap();

        assert!(record.is_new_user);
    }
}

// =============================================================================
// Social and Upload Tests
// =============================================================================

mod social_forwarding {
    use super::*;

    #[tokio::test]
    async fn test_forward_merges_tenant_and_caller() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/admin/deletepost"))
            .and(body_json(json!({
                "postId": "p1",
                "org": "org-1",
                "rootOrg": "root-1",
                "adminId": "u1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let route = social::lookup(&http::Method::POST, "admin/deletePost").unwrap();
        let forwarded = client_for(&server)
            .social()
            .forward(route, json!({ "postId": "p1" }), &tenant(), Some(&user()))
            .await
            .unwrap();

        assert_eq!(forwarded.status, 200);
        assert_eq!(forwarded.body, Some(json!({ "ok": true })));
    }

    #[tokio::test]
    async fn test_artifact_upload_path_is_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(
                "/contentv3/upload-live/root-1%2Forg-1%2FPublic%2Flex_1%2Fartifacts",
            ))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "artifactURL": "x" })))
            .expect(1)
            .mount(&server)
            .await;

        let forwarded = client_for(&server)
            .social()
            .upload_artifact(
                &tenant(),
                "lex_1",
                Artifact {
                    file_name: "pic.png".to_string(),
                    mime_type: Some("image/png".to_string()),
                    data: vec![1, 2, 3],
                },
            )
            .await
            .unwrap();

        assert_eq!(forwarded.status, 201);
    }

    #[tokio::test]
    async fn test_registration_sources_drop_only_null_url() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/content-sources"))
            .and(query_param("registrationProvided", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "a", "registrationUrl": "https://a" },
                { "id": "b", "registrationUrl": null },
                { "id": "c" }
            ])))
            .mount(&server)
            .await;

        let sources = client_for(&server)
            .registration()
            .sources(&tenant())
            .await
            .unwrap();

        assert_eq!(
            sources,
            vec![
                json!({ "id": "a", "registrationUrl": "https://a" }),
                json!({ "id": "c" }),
            ]
        );
    }

    #[test]
    fn test_reqwest_method_matches_route_method() {
        let route = social::lookup(&http::Method::PUT, "edit/meta").unwrap();
        assert_eq!(route.outbound.as_str(), Method::PUT.as_str());
    }
}

/// Gateway error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portal_core::ValidationError;
use portal_upstream::UpstreamError;
use serde_json::{json, Value};
use thiserror::Error;

/// Body sent when an upstream failure carries nothing to relay
pub const GENERAL_ERROR_MSG: &str = "Failed due to unknown reason";

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Upstream call failed: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session store error: {0}")]
    Session(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn error_body(message: impl Into<String>) -> Json<Value> {
    Json(json!({ "error": message.into() }))
}

/// Relay an upstream failure: its status (else 500) and its body (else a generic error)
fn upstream_response(err: &UpstreamError) -> Response {
    match err {
        UpstreamError::Status { status, body } => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            match body {
                Some(Value::String(text)) => (status, text.clone()).into_response(),
                Some(body) => (status, Json(body.clone())).into_response(),
                None => (status, error_body(GENERAL_ERROR_MSG)).into_response(),
            }
        }
        UpstreamError::ParseError(msg) => {
            tracing::error!("Unreadable upstream response: {}", msg);
            (StatusCode::BAD_GATEWAY, error_body("Invalid response from upstream")).into_response()
        }
        other => {
            tracing::error!("Upstream unavailable: {}", other);
            (StatusCode::INTERNAL_SERVER_ERROR, error_body(GENERAL_ERROR_MSG)).into_response()
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            GatewayError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            GatewayError::Upstream(ref e) => return upstream_response(e),
            GatewayError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            GatewayError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            GatewayError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            GatewayError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            GatewayError::Session(ref msg) => {
                tracing::error!("Session store error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Session error".to_string(),
                )
            }
            GatewayError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
        };

        (status, error_body(error_message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn parts(err: GatewayError) -> (StatusCode, Vec<u8>) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn json_of(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn test_validation_is_400_with_fixed_message() {
        let (status, body) = parts(ValidationError::MissingTenant.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_of(&body), json!({ "error": "ORG_DATA not provided" }));
    }

    #[tokio::test]
    async fn test_upstream_status_and_body_relayed() {
        let err = UpstreamError::Status {
            status: 409,
            body: Some(json!({ "message": "conflict" })),
        };
        let (status, body) = parts(err.into()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json_of(&body), json!({ "message": "conflict" }));
    }

    #[tokio::test]
    async fn test_upstream_without_body_gets_generic_error() {
        let err = UpstreamError::Status { status: 503, body: None };
        let (status, body) = parts(err.into()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_of(&body), json!({ "error": GENERAL_ERROR_MSG }));
    }

    #[tokio::test]
    async fn test_transport_failure_is_500() {
        let err = UpstreamError::Timeout("deadline".to_string());
        let (status, body) = parts(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_of(&body), json!({ "error": GENERAL_ERROR_MSG }));
    }

    #[tokio::test]
    async fn test_text_body_relayed_as_text() {
        let err = UpstreamError::Status {
            status: 400,
            body: Some(Value::String("bad input".to_string())),
        };
        let (status, body) = parts(err.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"bad input");
    }
}

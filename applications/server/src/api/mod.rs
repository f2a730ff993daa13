/// API route modules
pub mod autocomplete;
pub mod connections;
pub mod details;
pub mod goals;
pub mod health;
pub mod playlists;
pub mod registration;
pub mod social;
pub mod tnc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portal_upstream::Forwarded;
use serde_json::Value;

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Upstream status and body, relayed unchanged
pub(crate) fn relay(forwarded: Forwarded) -> Response {
    let status = status_code(forwarded.status);
    match forwarded.body {
        Some(Value::String(text)) => (status, text).into_response(),
        Some(body) => (status, Json(body)).into_response(),
        None => status.into_response(),
    }
}

/// Upstream status with an empty body
pub(crate) fn status_only(forwarded: &Forwarded) -> Response {
    status_code(forwarded.status).into_response()
}

/// Upstream status with a `true` body
pub(crate) fn status_true(forwarded: &Forwarded) -> Response {
    (status_code(forwarded.status), Json(true)).into_response()
}

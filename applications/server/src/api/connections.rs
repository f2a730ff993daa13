/// Connection API routes
use crate::{
    api::relay,
    error::Result,
    middleware::{JsonBody, RequiredUser, Tenant},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use portal_core::{
    aggregate,
    types::{ConnectionEntry, ConnectionStatusChange, SendConnectionRequest, WithdrawRequest, ACTION_WITHDRAW},
};

/// GET /user/connections/list
/// Active connections followed by pending requests
pub async fn list_connections(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Json<Vec<ConnectionEntry>>> {
    let entries = aggregate::merge_connections(&app_state.upstream.connections(), &user, &tenant).await?;
    Ok(Json(entries))
}

/// POST /user/connections/send-request
pub async fn send_request(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
    JsonBody(req): JsonBody<SendConnectionRequest>,
) -> Result<Response> {
    let forwarded = app_state
        .upstream
        .connections()
        .send_request(&user, &tenant, &req)
        .await?;

    tracing::info!(from = %req.requested_by, to = %req.requested_to, "Connection requested");
    Ok(relay(forwarded))
}

/// POST /user/connections/withdraw-pending
/// Withdraw a request the caller sent
pub async fn withdraw_pending(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
    JsonBody(req): JsonBody<WithdrawRequest>,
) -> Result<Response> {
    let change = ConnectionStatusChange {
        action: ACTION_WITHDRAW.to_string(),
        actor_id: user.to_string(),
        request_id: req.request_id,
    };
    let forwarded = app_state
        .upstream
        .connections()
        .change_status(&user, &tenant, &change)
        .await?;
    Ok(relay(forwarded))
}

/// GET /user/connections/invitation/:requestId/:action
/// Accept or reject a request sent to the caller
pub async fn respond_to_invitation(
    Path((request_id, action)): Path<(String, String)>,
    State(app_state): State<AppState>,
    RequiredUser(user): RequiredUser,
    Tenant(tenant): Tenant,
) -> Result<Response> {
    let change = ConnectionStatusChange {
        action,
        actor_id: user.to_string(),
        request_id,
    };
    let forwarded = app_state
        .upstream
        .connections()
        .change_status(&user, &tenant, &change)
        .await?;

    tracing::info!(user = %user, request = %change.request_id, action = %change.action, "Invitation answered");
    Ok(relay(forwarded))
}

/// Content-source user registration API routes (admin)
use crate::{
    error::Result,
    middleware::{JsonBody, RequiredUser, Tenant},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

/// Body of a registration: the source and the users to register with it
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub source: String,
    #[serde(default)]
    pub items: Value,
}

/// GET /admin/userRegistration/listUsers/:source
pub async fn list_users(
    Path(source): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
) -> Result<Json<Value>> {
    let users = app_state.upstream.registration().users(&tenant, &source).await?;
    Ok(Json(users))
}

/// POST /admin/userRegistration/deregisterUsers/:source
pub async fn deregister_users(
    Path(source): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<Value>> {
    let result = app_state
        .upstream
        .registration()
        .deregister(&tenant, &source, &body)
        .await?;

    tracing::info!(source = %source, org = %tenant.root_org, "Users deregistered");
    Ok(Json(result))
}

/// GET /admin/userRegistration/getAllSources
/// Sources offering a registration URL
pub async fn all_sources(State(app_state): State<AppState>, Tenant(tenant): Tenant) -> Result<Json<Vec<Value>>> {
    let sources = app_state.upstream.registration().sources(&tenant).await?;
    Ok(Json(sources))
}

/// GET /admin/userRegistration/getSourceDetail/:id
pub async fn source_detail(
    Path(source): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
) -> Result<Json<Value>> {
    let detail = app_state.upstream.registration().source(&tenant, &source).await?;
    Ok(Json(detail))
}

/// GET /admin/userRegistration/checkUserRegistrationContent/:source
/// Whether the caller is registered with a source
pub async fn user_registration_status(
    Path(source): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Json<Value>> {
    let status = app_state
        .upstream
        .registration()
        .user_status(&tenant, &source, &user)
        .await?;
    Ok(Json(status))
}

/// POST /admin/userRegistration/register
pub async fn register_users(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<Json<Value>> {
    let result = app_state
        .upstream
        .registration()
        .register(&tenant, &req.source, &req.items)
        .await?;

    tracing::info!(source = %req.source, org = %tenant.root_org, "Users registered");
    Ok(Json(result))
}

/// Terms-and-conditions API routes
use crate::{
    error::Result,
    middleware::{JsonBody, RequiredUser, Tenant},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use portal_core::{
    aggregate,
    transform::tnc as transform,
    types::{AcceptTncRequest, TncRecord},
};
use portal_upstream::LANG_HEADER;
use serde::Deserialize;

const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

impl LocaleQuery {
    fn locale(&self) -> &str {
        self.locale
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCALE)
    }
}

/// Language from the `langCode` header
fn lang_code(headers: &HeaderMap) -> &str {
    headers
        .get(LANG_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_LOCALE)
}

/// GET /user/tnc
/// The caller's terms, or the tenant's common terms for a new user
pub async fn get_terms(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<TncRecord>> {
    let record =
        aggregate::terms_with_fallback(&app_state.upstream.terms(), &user, &tenant, query.locale()).await?;
    Ok(Json(record))
}

/// GET /user/tnc/status
/// Whether the caller accepted the current terms; lookup failures read as `false`
pub async fn terms_status(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
    Query(query): Query<LocaleQuery>,
) -> Json<bool> {
    Json(aggregate::terms_status(&app_state.upstream.terms(), &user, &tenant, query.locale()).await)
}

/// POST /user/tnc/accept
pub async fn accept_terms(
    State(app_state): State<AppState>,
    RequiredUser(user): RequiredUser,
    Tenant(tenant): Tenant,
    headers: HeaderMap,
    JsonBody(req): JsonBody<AcceptTncRequest>,
) -> Result<Response> {
    let body = transform::to_upstream_accept(&req, &user);
    let response = app_state
        .upstream
        .terms()
        .accept(&tenant, lang_code(&headers), &body)
        .await?;

    if response.is_success() {
        tracing::info!(user = %user, "Terms accepted");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    tracing::warn!(user = %user, result = ?response.result, "Terms acceptance not confirmed");
    Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response())
}

/// PATCH /user/tnc/postprocessing
/// Kick off the extension service's work after acceptance
pub async fn postprocess_terms(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
    headers: HeaderMap,
) -> Result<Response> {
    let forwarded = app_state
        .upstream
        .terms()
        .postprocess(&user, &tenant, lang_code(&headers))
        .await?;

    Ok(match forwarded.body {
        Some(body) => (StatusCode::OK, Json(body)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// GET /public/v8/tnc
/// The tenant's common terms, no caller needed
pub async fn public_terms(State(app_state): State<AppState>, Tenant(tenant): Tenant) -> Result<Json<TncRecord>> {
    let common = app_state.upstream.terms().common(&tenant).await?;
    Ok(Json(transform::from_common_terms(common)))
}

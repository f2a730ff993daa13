/// User detail API routes
use crate::{
    error::{GatewayError, Result},
    middleware::{JsonBody, RequiredUser, Tenant},
    state::AppState,
};
use axum::{extract::State, http::HeaderMap, Json};
use futures_util::future::join;
use portal_core::{
    aggregate,
    types::{EmailLookup, ProfileQuery, UserDetails, WidLookup, BASIC_PROFILE_FIELDS, EXTENDED_PROFILE_FIELDS},
};
use portal_upstream::LANG_HEADER;
use serde_json::Value;

/// GET /user/details
/// Roles and terms acceptance of the caller
pub async fn user_details(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
    headers: HeaderMap,
) -> Result<Json<UserDetails>> {
    let locale = headers
        .get(LANG_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or("en");

    let terms = app_state.upstream.terms();
    let profiles = app_state.upstream.profiles();
    let (tnc_status, roles) = join(
        aggregate::terms_status(&terms, &user, &tenant, locale),
        profiles.roles(&user, &tenant),
    )
    .await;

    Ok(Json(UserDetails {
        group: Vec::new(),
        roles: roles?.combined(),
        tnc_status,
    }))
}

/// POST /user/details/detailV1
/// Basic profile of the user with the given email
pub async fn detail_by_email(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    JsonBody(req): JsonBody<EmailLookup>,
) -> Result<Json<Value>> {
    let query = ProfileQuery::new(&tenant.root_org, BASIC_PROFILE_FIELDS, vec![req.email]);
    let profiles = app_state.upstream.profiles().by_email(&tenant, &query).await?;
    Ok(Json(profiles))
}

/// GET /user/details/detailV2
/// Basic profile of the caller
pub async fn caller_detail(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Json<Value>> {
    let query = ProfileQuery::new(
        &tenant.root_org,
        BASIC_PROFILE_FIELDS,
        vec![Value::String(user.to_string())],
    );
    let profiles = app_state.upstream.profiles().by_wid(&tenant, &query).await?;

    match profiles {
        Value::Array(mut found) if !found.is_empty() => Ok(Json(found.swap_remove(0))),
        _ => {
            tracing::debug!(user = %user, "No profile found");
            Err(GatewayError::NotFound("User not found".to_string()))
        }
    }
}

/// POST /user/details/detailV3
/// Extended profiles of one or more users
pub async fn details_by_wid(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    JsonBody(req): JsonBody<WidLookup>,
) -> Result<Json<Value>> {
    let query = ProfileQuery::new(&tenant.root_org, EXTENDED_PROFILE_FIELDS, req.values());
    let profiles = app_state.upstream.profiles().by_wid(&tenant, &query).await?;
    Ok(Json(profiles))
}

/// User autocomplete API route
use crate::{error::Result, middleware::Tenant, state::AppState};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use portal_core::types::AutocompleteParams;
use serde_json::Value;

/// GET /user/autocomplete/:query
/// Users of the root org whose profile matches `query`
pub async fn autocomplete_users(
    Path(query): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    Query(params): Query<AutocompleteParams>,
) -> Result<Json<Value>> {
    let users = app_state
        .upstream
        .profiles()
        .autocomplete(&tenant, &query, &params)
        .await?;
    Ok(Json(users))
}

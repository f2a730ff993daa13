/// Learning goal API routes
use crate::{
    error::Result,
    middleware::{JsonBody, RequiredUser, Tenant},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use portal_core::{
    transform::goal as transform,
    types::{GoalUpsertRequest, GoalUpsertResponse, GoalsGroup, TrackStatus, UserGoals},
};

/// GET /user/goals
pub async fn user_goals(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Json<UserGoals>> {
    let goals = app_state.upstream.goals().user_goals(&user, &tenant).await?;
    Ok(Json(transform::to_user_goals(&goals)))
}

/// GET /user/goals/common
pub async fn common_goals(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Json<Vec<GoalsGroup>>> {
    let groups = app_state.upstream.goals().common_goals(&user, &tenant).await?;
    Ok(Json(groups.iter().map(transform::to_goal_group).collect()))
}

/// POST /user/goals
/// Create or update a goal. Upstream goal errors come back as `{"error"}` with a 200.
pub async fn upsert_goal(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
    JsonBody(req): JsonBody<GoalUpsertRequest>,
) -> Result<Json<GoalUpsertResponse>> {
    let response = app_state
        .upstream
        .goals()
        .upsert(&user, &tenant, &transform::to_upstream_upsert(&req))
        .await?;

    let response = transform::to_upsert_response(&response);
    if let Some(error) = &response.error {
        tracing::warn!(user = %user, goal = %req.name, error = %error, "Goal upsert rejected");
    }
    Ok(Json(response))
}

/// GET /user/goals/:id/track
/// Who accepted, ignored or rejected a goal the caller shared
pub async fn track_goal(
    Path(goal_id): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Json<TrackStatus>> {
    let status = app_state
        .upstream
        .goals()
        .track_status(&user, &tenant, &goal_id)
        .await?;
    Ok(Json(transform::to_track_status(&status)))
}

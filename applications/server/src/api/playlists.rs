/// Playlist API routes
use crate::{
    api::{status_only, status_true},
    error::{GatewayError, Result},
    middleware::{Caller, JsonBody, RequiredUser, Tenant},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use portal_core::{
    aggregate,
    transform::playlist as transform,
    types::{
        CreatePlaylistRequest, PaginatedContents, Playlist, PlaylistContentsRequest, PlaylistListing,
        SharePlaylistRequest, UpdatePlaylistRequest,
    },
    TenantContext, UserId, ValidationError,
};
use portal_upstream::SharedPlaylistAction;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// List someone else's playlists instead of the caller's
    pub wid: Option<String>,
}

/// GET /user/playlist
/// Owned, shared and pending playlists of the caller
pub async fn list_playlists(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    Query(query): Query<ListQuery>,
    Caller(caller): Caller,
) -> Result<Json<PlaylistListing>> {
    let user = match query.wid.filter(|w| !w.is_empty()) {
        Some(wid) => UserId::new(wid),
        None => caller.require_user_id()?.clone(),
    };

    let listing = aggregate::merge_playlists(&app_state.upstream.playlists(), &user, &tenant).await?;
    Ok(Json(listing))
}

/// GET /user/playlist/pending
/// Shared playlists awaiting accept/reject
pub async fn pending_playlists(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Json<Vec<Playlist>>> {
    let pending = app_state.upstream.playlists().pending(&user, &tenant).await?;
    Ok(Json(pending.iter().map(transform::to_playlist_v2).collect()))
}

/// GET /user/playlist/recent
/// Contents recently added to any of the caller's playlists
pub async fn recent_contents(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Json<PaginatedContents>> {
    let recent = app_state.upstream.playlists().recent_contents(&user, &tenant).await?;
    Ok(Json(transform::to_recent_contents(recent)))
}

/// GET /user/playlist/sync/:id
/// Pull the sharer's contents into a shared playlist
pub async fn sync_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Json<Vec<Value>>> {
    let playlists = app_state.upstream.playlists();
    let info = playlists.sync_info(&user, &tenant, &id).await?;
    let request = transform::to_upstream_sync(&info);
    playlists.push_sync(&user, &tenant, &id, &request).await?;

    tracing::info!(playlist = %id, contents = request.content.len(), "Playlist synced");
    Ok(Json(request.content))
}

/// GET /user/playlist/:type/:id
/// Playlist details; the type segment is informational
pub async fn get_playlist(
    Path((_kind, id)): Path<(String, String)>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Json<Playlist>> {
    playlist_detail(&app_state, &tenant, &user, &id).await
}

/// GET /user/playlist/{share,accept,reject}/:id
/// Same as [`get_playlist`] for type segments that also name an action
pub async fn get_typed_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Json<Playlist>> {
    playlist_detail(&app_state, &tenant, &user, &id).await
}

async fn playlist_detail(
    app_state: &AppState,
    tenant: &TenantContext,
    user: &UserId,
    id: &str,
) -> Result<Json<Playlist>> {
    let detail = app_state.upstream.playlists().detail(user, tenant, id).await?;
    Ok(Json(transform::to_playlist_v3(&detail, id)))
}

/// POST /user/playlist/create
/// Create a playlist, sharing it right away when `shareWith` is given
pub async fn create_playlist(
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
    JsonBody(req): JsonBody<CreatePlaylistRequest>,
) -> Result<Response> {
    let playlists = app_state.upstream.playlists();
    let created = playlists
        .create(&user, &tenant, &transform::to_upstream_create(&req))
        .await?;

    if req.share_with.is_empty() {
        return Ok(status_only(&created));
    }

    // The playlist service does not return the new id; the newest owned playlist is listed first
    let listing = match aggregate::merge_playlists(&playlists, &user, &tenant).await {
        Ok(listing) => listing,
        Err(e) => {
            tracing::warn!(user = %user, error = %e, "Could not list playlists after create, not sharing");
            return Ok(status_only(&created));
        }
    };

    match listing.user.first().and_then(|p| p.id.clone()) {
        Some(id) => {
            let share = SharePlaylistRequest {
                message: req.share_msg.clone(),
                users: req.share_with.clone(),
            };
            let shared = playlists.share(&user, &tenant, &id, &share).await?;
            Ok(status_only(&shared))
        }
        None => Ok(status_only(&created)),
    }
}

/// POST /user/playlist/accept/:id
/// Accept a pending shared playlist
pub async fn accept_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Response> {
    let playlists = app_state.upstream.playlists();
    if !aggregate::is_pending_playlist(&playlists, &user, &tenant, &id).await? {
        return Err(GatewayError::NotFound("Playlist not found".to_string()));
    }

    let accepted = playlists
        .respond(&user, &tenant, &id, SharedPlaylistAction::Accept)
        .await?;
    Ok(status_true(&accepted))
}

/// POST /user/playlist/reject/:id
/// Reject a pending shared playlist
pub async fn reject_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Response> {
    let rejected = app_state
        .upstream
        .playlists()
        .respond(&user, &tenant, &id, SharedPlaylistAction::Reject)
        .await?;
    Ok(status_only(&rejected))
}

/// POST /user/playlist/share/:id
pub async fn share_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
    JsonBody(req): JsonBody<SharePlaylistRequest>,
) -> Result<Response> {
    let shared = app_state.upstream.playlists().share(&user, &tenant, &id, &req).await?;
    Ok(status_only(&shared))
}

/// POST /user/playlist/:id/:action
/// Add (`add`) or remove (`delete`) contents
pub async fn update_contents(
    Path((id, action)): Path<(String, String)>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
    JsonBody(req): JsonBody<PlaylistContentsRequest>,
) -> Result<Response> {
    let playlists = app_state.upstream.playlists();
    let forwarded = match action.as_str() {
        "add" => {
            playlists
                .add_contents(&user, &tenant, &id, &transform::to_upstream_add(&req))
                .await?
        }
        "delete" => {
            playlists
                .remove_contents(&user, &tenant, &id, &transform::to_upstream_remove(&req))
                .await?
        }
        other => {
            return Err(ValidationError::invalid(format!("unknown playlist action: {}", other)).into());
        }
    };
    Ok(status_only(&forwarded))
}

/// PATCH /user/playlist/:id
/// Update title, contents and visibility
pub async fn update_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
    JsonBody(req): JsonBody<UpdatePlaylistRequest>,
) -> Result<Response> {
    let updated = app_state
        .upstream
        .playlists()
        .update(&user, &tenant, &id, &transform::to_upstream_update(&req))
        .await?;
    Ok(status_only(&updated))
}

/// DELETE /user/playlist/:id
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    RequiredUser(user): RequiredUser,
) -> Result<Response> {
    let deleted = app_state.upstream.playlists().delete(&user, &tenant, &id).await?;
    Ok(status_true(&deleted))
}

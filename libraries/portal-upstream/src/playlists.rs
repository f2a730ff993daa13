//! Playlist service operations.

use crate::client::{forward, send_json, PortalClient};
use crate::error::{Result, UpstreamError};
use crate::types::{Forwarded, SharedPlaylistAction};
use async_trait::async_trait;
use portal_core::types::{
    PlaylistSyncInfo, SharePlaylistRequest, UpstreamAddContents, UpstreamCreatePlaylist,
    UpstreamPlaylist, UpstreamPlaylistDetail, UpstreamRecentContents, UpstreamRemoveContents,
    UpstreamSyncRequest, UpstreamUpdatePlaylist,
};
use portal_core::{PlaylistSource, TenantContext, UserId};
use reqwest::Method;
use serde_json::json;
use tracing::debug;

/// Playlist client.
pub struct PlaylistClient<'a> {
    client: &'a PortalClient,
}

impl<'a> PlaylistClient<'a> {
    pub(crate) fn new(client: &'a PortalClient) -> Self {
        Self { client }
    }

    /// Playlists the user owns plus the shared ones they accepted.
    pub async fn owned(&self, user: &UserId, tenant: &TenantContext) -> Result<Vec<UpstreamPlaylist>> {
        let url = self.client.bases().playlists(user);
        let playlists: Vec<UpstreamPlaylist> =
            send_json(self.client.request(Method::GET, &url, tenant), "playlists").await?;
        debug!(user = %user, count = playlists.len(), "Fetched playlists");
        Ok(playlists)
    }

    /// Shared playlists waiting for the user to accept or reject them.
    pub async fn pending(&self, user: &UserId, tenant: &TenantContext) -> Result<Vec<UpstreamPlaylist>> {
        let url = self.client.bases().pending_playlists(user);
        send_json(self.client.request(Method::GET, &url, tenant), "pending playlists").await
    }

    pub async fn detail(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        playlist_id: &str,
    ) -> Result<UpstreamPlaylistDetail> {
        let url = self.client.bases().playlist(user, playlist_id);
        send_json(self.client.request(Method::GET, &url, tenant), "playlist").await
    }

    pub async fn create(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        body: &UpstreamCreatePlaylist,
    ) -> Result<Forwarded> {
        let url = self.client.bases().playlists(user);
        forward(self.client.request(Method::POST, &url, tenant).json(body)).await
    }

    pub async fn add_contents(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        playlist_id: &str,
        body: &UpstreamAddContents,
    ) -> Result<Forwarded> {
        let url = self.client.bases().playlist_contents(user, playlist_id);
        forward(self.client.request(Method::POST, &url, tenant).json(body)).await
    }

    /// Remove contents; the playlist service takes a body on DELETE.
    pub async fn remove_contents(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        playlist_id: &str,
        body: &UpstreamRemoveContents,
    ) -> Result<Forwarded> {
        let url = self.client.bases().playlist_contents(user, playlist_id);
        forward(self.client.request(Method::DELETE, &url, tenant).json(body)).await
    }

    pub async fn update(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        playlist_id: &str,
        body: &UpstreamUpdatePlaylist,
    ) -> Result<Forwarded> {
        let url = self.client.bases().playlist(user, playlist_id);
        forward(self.client.request(Method::PATCH, &url, tenant).json(body)).await
    }

    pub async fn delete(&self, user: &UserId, tenant: &TenantContext, playlist_id: &str) -> Result<Forwarded> {
        let url = self.client.bases().playlist(user, playlist_id);
        forward(self.client.request(Method::DELETE, &url, tenant)).await
    }

    pub async fn share(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        playlist_id: &str,
        body: &SharePlaylistRequest,
    ) -> Result<Forwarded> {
        let url = self.client.bases().playlist_share(user, playlist_id);
        forward(self.client.request(Method::POST, &url, tenant).json(body)).await
    }

    /// Accept or reject a pending shared playlist.
    pub async fn respond(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        playlist_id: &str,
        action: SharedPlaylistAction,
    ) -> Result<Forwarded> {
        let url = self
            .client
            .bases()
            .pending_playlist_action(user, playlist_id, action.as_str());
        forward(self.client.request(Method::POST, &url, tenant).json(&json!({}))).await
    }

    pub async fn sync_info(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        playlist_id: &str,
    ) -> Result<PlaylistSyncInfo> {
        let url = self.client.bases().playlist_sync_info(user, playlist_id);
        send_json(self.client.request(Method::GET, &url, tenant), "sync info").await
    }

    /// Write synced contents back into the playlist.
    pub async fn push_sync(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        playlist_id: &str,
        body: &UpstreamSyncRequest,
    ) -> Result<Forwarded> {
        let url = self.client.bases().playlist_contents(user, playlist_id);
        forward(self.client.request(Method::POST, &url, tenant).json(body)).await
    }

    pub async fn recent_contents(
        &self,
        user: &UserId,
        tenant: &TenantContext,
    ) -> Result<UpstreamRecentContents> {
        let url = self.client.bases().recent_playlist_contents(user);
        send_json(self.client.request(Method::GET, &url, tenant), "recent contents").await
    }
}

#[async_trait]
impl PlaylistSource for PlaylistClient<'_> {
    type Error = UpstreamError;

    async fn owned_playlists(&self, user: &UserId, tenant: &TenantContext) -> Result<Vec<UpstreamPlaylist>> {
        self.owned(user, tenant).await
    }

    async fn pending_playlists(&self, user: &UserId, tenant: &TenantContext) -> Result<Vec<UpstreamPlaylist>> {
        self.pending(user, tenant).await
    }
}

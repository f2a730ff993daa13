//! Upstream capabilities the aggregators fan out over
//!
//! The upstream crate implements these against the real services; tests
//! implement them with canned data.

use crate::tenant::TenantContext;
use crate::types::{ActiveConnection, PendingConnection, UpstreamPlaylist, UpstreamTnc, UserId};
use async_trait::async_trait;

/// Source of a caller's social connections
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    /// Failure reported by the source
    type Error: std::error::Error + Send;

    /// Accepted connections of `user`
    async fn active_connections(
        &self,
        user: &UserId,
        tenant: &TenantContext,
    ) -> Result<Vec<ActiveConnection>, Self::Error>;

    /// Connection requests involving `user` still awaiting action
    async fn pending_connections(
        &self,
        user: &UserId,
        tenant: &TenantContext,
    ) -> Result<Vec<PendingConnection>, Self::Error>;
}

/// Source of a caller's playlists
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Failure reported by the source
    type Error: std::error::Error + Send;

    /// Playlists the caller owns plus shared ones they accepted
    async fn owned_playlists(
        &self,
        user: &UserId,
        tenant: &TenantContext,
    ) -> Result<Vec<UpstreamPlaylist>, Self::Error>;

    /// Shared playlists awaiting accept/reject
    async fn pending_playlists(
        &self,
        user: &UserId,
        tenant: &TenantContext,
    ) -> Result<Vec<UpstreamPlaylist>, Self::Error>;
}

/// Source of terms-and-conditions records
#[async_trait]
pub trait TermsSource: Send + Sync {
    /// Failure reported by the source
    type Error: std::error::Error + Send;

    /// Terms as they apply to `user`, in `locale`
    async fn user_terms(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        locale: &str,
    ) -> Result<UpstreamTnc, Self::Error>;

    /// The tenant's current terms, independent of any user
    async fn common_terms(&self, tenant: &TenantContext) -> Result<UpstreamTnc, Self::Error>;
}

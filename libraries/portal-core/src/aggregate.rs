//! Fan-out aggregators.
//!
//! Each aggregator issues its upstream calls together and waits for all of
//! them before deciding anything. A failed call fails the whole operation;
//! when several fail, the first in the aggregator's fixed order is the one
//! reported.

use crate::tenant::TenantContext;
use crate::traits::{ConnectionSource, PlaylistSource, TermsSource};
use crate::transform::{connection, playlist, tnc};
use crate::types::{ConnectionEntry, PlaylistListing, TncRecord, UserId};
use futures_util::future::join;
use tracing::{debug, warn};

/// Active connections followed by pending requests, in upstream order
pub async fn merge_connections<S>(
    source: &S,
    caller: &UserId,
    tenant: &TenantContext,
) -> Result<Vec<ConnectionEntry>, S::Error>
where
    S: ConnectionSource + ?Sized,
{
    let (active, pending) = join(
        source.active_connections(caller, tenant),
        source.pending_connections(caller, tenant),
    )
    .await;

    let active = active.inspect_err(|e| warn!(user = %caller, error = %e, "Active connections failed"))?;
    let pending =
        pending.inspect_err(|e| warn!(user = %caller, error = %e, "Pending connections failed"))?;

    debug!(
        user = %caller,
        active = active.len(),
        pending = pending.len(),
        "Merged connections"
    );

    Ok(active
        .iter()
        .map(|c| connection::from_active(c, caller))
        .chain(pending.iter().map(connection::from_pending))
        .collect())
}

/// The caller's playlists partitioned into `user`, `share` and `pending`
pub async fn merge_playlists<S>(
    source: &S,
    caller: &UserId,
    tenant: &TenantContext,
) -> Result<PlaylistListing, S::Error>
where
    S: PlaylistSource + ?Sized,
{
    let (owned, pending) = join(
        source.owned_playlists(caller, tenant),
        source.pending_playlists(caller, tenant),
    )
    .await;

    let owned = owned.inspect_err(|e| warn!(user = %caller, error = %e, "Playlist listing failed"))?;
    let pending =
        pending.inspect_err(|e| warn!(user = %caller, error = %e, "Pending playlists failed"))?;

    Ok(playlist::to_playlist_listing(&owned, &pending))
}

/// Whether `playlist_id` is among the caller's pending shared playlists
pub async fn is_pending_playlist<S>(
    source: &S,
    caller: &UserId,
    tenant: &TenantContext,
    playlist_id: &str,
) -> Result<bool, S::Error>
where
    S: PlaylistSource + ?Sized,
{
    let pending = source.pending_playlists(caller, tenant).await?;
    Ok(pending
        .iter()
        .any(|p| p.playlist_id.as_deref() == Some(playlist_id)))
}

/// The caller's terms, falling back to the tenant's common terms.
///
/// A fallback record always marks the caller as new. When both lookups
/// fail the common-terms error is returned.
pub async fn terms_with_fallback<S>(
    source: &S,
    caller: &UserId,
    tenant: &TenantContext,
    locale: &str,
) -> Result<TncRecord, S::Error>
where
    S: TermsSource + ?Sized,
{
    match source.user_terms(caller, tenant, locale).await {
        Ok(terms) => Ok(tnc::from_user_terms(terms)),
        Err(e) => {
            warn!(user = %caller, error = %e, "User terms failed, falling back to common terms");
            let common = source
                .common_terms(tenant)
                .await
                .inspect_err(|e| warn!(org = %tenant.org, error = %e, "Common terms failed"))?;
            Ok(tnc::from_common_terms(common))
        }
    }
}

/// Acceptance flag of the resolved terms; any failure reads as not accepted
pub async fn terms_status<S>(
    source: &S,
    caller: &UserId,
    tenant: &TenantContext,
    locale: &str,
) -> bool
where
    S: TermsSource + ?Sized,
{
    terms_with_fallback(source, caller, tenant, locale)
        .await
        .map(|record| record.is_accepted)
        .unwrap_or(false)
}

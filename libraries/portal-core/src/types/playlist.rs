/// Playlist types: public DTOs and the playlist service's wire shapes
use super::{null_as_empty, ContentItem, ContentRef};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a playlist is the caller's own or was shared with them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistType {
    /// Owned by the caller
    User,
    /// Shared with the caller by someone else
    Share,
}

/// Client-facing playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Playlist id
    pub id: Option<String>,
    /// Title
    pub name: Option<String>,
    /// Content details
    pub contents: Vec<ContentItem>,
    /// Content identifiers
    pub resource_ids: Vec<Value>,
    /// Sharer's user id
    pub shared_by: Option<String>,
    /// Sharer's display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_by_display_name: Option<String>,
    /// When it was shared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_on: Option<Value>,
    /// Playlist status
    pub status: Option<String>,
    /// Visibility
    pub visibility: Option<String>,
    /// Owned or shared
    #[serde(rename = "type")]
    pub kind: PlaylistType,
    /// Creation time
    pub created_on: Option<Value>,
    /// Total duration in seconds, detail view only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Icon of the first content that has one
    pub icon: Option<String>,
}

/// Listing of every playlist visible to a caller, partitioned by kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistListing {
    /// Playlists the caller owns
    pub user: Vec<Playlist>,
    /// Shared playlists the caller has accepted
    pub share: Vec<Playlist>,
    /// Shared playlists awaiting the caller's accept/reject
    pub pending: Vec<Playlist>,
}

/// Sharer as embedded in the list-shaped upstream playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedBy {
    /// Sharer's user id
    #[serde(default)]
    pub user_id: Option<String>,
    /// Sharer's name
    #[serde(default)]
    pub name: Option<String>,
}

/// Playlist as returned by the list endpoints of the playlist service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamPlaylist {
    /// Playlist id
    #[serde(default)]
    pub playlist_id: Option<String>,
    /// Title
    #[serde(default)]
    pub playlist_title: Option<String>,
    /// Content details
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content_meta: Vec<ContentItem>,
    /// Content identifiers
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resource_ids: Vec<Value>,
    /// Sharer, for shared playlists
    #[serde(default)]
    pub shared_by: Option<SharedBy>,
    /// When it was shared
    #[serde(default)]
    pub shared_on: Option<Value>,
    /// Visibility
    #[serde(default)]
    pub visibility: Option<String>,
    /// Playlist status
    #[serde(default)]
    pub status: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_on: Option<Value>,
}

/// Playlist as returned by the single-playlist detail endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamPlaylistDetail {
    /// Title
    #[serde(rename = "playlistTitle", default)]
    pub playlist_title: Option<String>,
    /// Full content objects, despite the name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resource_ids: Vec<ContentItem>,
    /// Content identifiers
    #[serde(rename = "resourceIds", default, deserialize_with = "null_as_empty")]
    pub resource_id_list: Vec<Value>,
    /// Sharer's user id
    #[serde(rename = "sharedBy", default)]
    pub shared_by: Option<String>,
    /// Creation time
    #[serde(rename = "createdOn", default)]
    pub created_on: Option<Value>,
    /// Visibility
    #[serde(default)]
    pub visibility: Option<String>,
    /// Playlist status
    #[serde(default)]
    pub status: Option<String>,
}

/// Public body for creating a playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    /// Title
    pub playlist_title: String,
    /// Initial contents
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content_ids: Vec<String>,
    /// Visibility
    #[serde(default)]
    pub visibility: Option<String>,
    /// Users to share the new playlist with
    #[serde(rename = "shareWith", default, deserialize_with = "null_as_empty")]
    pub share_with: Vec<String>,
    /// Message sent with the share
    #[serde(rename = "shareMsg", default)]
    pub share_msg: Option<String>,
}

/// Upstream body for creating a playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamCreatePlaylist {
    /// Initial contents
    pub content_ids: Vec<String>,
    /// Title
    pub playlist_title: String,
    /// Visibility
    pub visibility: Option<String>,
}

/// Public body for adding/removing playlist contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistContentsRequest {
    /// Contents to add or remove
    #[serde(rename = "contentIds", default, deserialize_with = "null_as_empty")]
    pub content_ids: Vec<String>,
}

/// Upstream body for adding contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamAddContents {
    /// Contents to add
    pub content_ids: Vec<String>,
}

/// Upstream body for removing contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamRemoveContents {
    /// Contents to remove
    pub content: Vec<String>,
}

/// Public body for the title/contents PATCH
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlaylistRequest {
    /// New title
    pub playlist_title: String,
    /// New contents
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content_ids: Vec<ContentRef>,
    /// New visibility
    #[serde(default)]
    pub visibility: Option<String>,
}

/// Upstream body for the title/contents PATCH
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamUpdatePlaylist {
    /// New contents
    pub content_ids: Vec<String>,
    /// New title
    pub playlist_title: String,
    /// New visibility
    pub visibility: Option<String>,
}

/// Sync info of a shared playlist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSyncInfo {
    /// Contents only the sharer's copy has
    #[serde(default, deserialize_with = "null_as_empty")]
    pub only_sharedby_playlist_content: Vec<Value>,
}

/// Upstream body pushing synced contents back into a playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamSyncRequest {
    /// Contents to pull in
    pub content: Vec<Value>,
}

/// Share body; identical on both sides of the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharePlaylistRequest {
    /// Message sent with the share
    #[serde(default)]
    pub message: Option<String>,
    /// Recipients
    #[serde(default, deserialize_with = "null_as_empty")]
    pub users: Vec<String>,
}

/// Recently added playlist contents as the playlist service returns them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamRecentContents {
    /// Most recent first
    #[serde(rename = "recentContents", default, deserialize_with = "null_as_empty")]
    pub recent_contents: Vec<Value>,
}

/// Paginated content listing returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedContents {
    /// Page of contents
    pub contents: Vec<Value>,
    /// Whether more pages follow
    pub has_more: bool,
}

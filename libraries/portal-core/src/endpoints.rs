//! Upstream endpoint resolution.
//!
//! Every function here is total: it only concatenates configured base URLs
//! with path parameters. A malformed input produces a malformed (but
//! deterministic) URL, which the HTTP call then rejects.

use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Base URLs of the upstream services, as configured
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamBases {
    /// Playlist service
    #[serde(default)]
    pub playlist: String,
    /// Terms-and-conditions service
    #[serde(default)]
    pub tnc: String,
    /// Extension service (TNC post-processing)
    #[serde(default)]
    pub sb_ext: String,
    /// Extension service v2 (connections)
    #[serde(default)]
    pub sb_ext_2: String,
    /// Goals service
    #[serde(default)]
    pub goals: String,
    /// User-profile service
    #[serde(default)]
    pub profile: String,
    /// Social/forum service
    #[serde(default)]
    pub social: String,
    /// Content platform
    #[serde(default)]
    pub content: String,
}

impl UpstreamBases {
    /// All bases pointing at one host; handy for tests and single-host setups
    pub fn single_host(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            playlist: base.clone(),
            tnc: base.clone(),
            sb_ext: base.clone(),
            sb_ext_2: base.clone(),
            goals: base.clone(),
            profile: base.clone(),
            social: base.clone(),
            content: base,
        }
    }

    /// Named (key, value) pairs, for validation and logging
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("playlist", self.playlist.as_str()),
            ("tnc", self.tnc.as_str()),
            ("sb_ext", self.sb_ext.as_str()),
            ("sb_ext_2", self.sb_ext_2.as_str()),
            ("goals", self.goals.as_str()),
            ("profile", self.profile.as_str()),
            ("social", self.social.as_str()),
            ("content", self.content.as_str()),
        ]
    }

    // =========================================================================
    // Playlist service
    // =========================================================================

    fn playlist_user(&self, user: &UserId) -> String {
        format!("{}/v1/users/{}", trim(&self.playlist), user)
    }

    /// Owned + shared playlists (GET), create (POST)
    pub fn playlists(&self, user: &UserId) -> String {
        format!("{}/playlists", self.playlist_user(user))
    }

    /// One playlist (GET, PATCH, DELETE)
    pub fn playlist(&self, user: &UserId, playlist_id: &str) -> String {
        format!("{}/playlists/{}", self.playlist_user(user), playlist_id)
    }

    /// Contents of a playlist (POST add, DELETE remove)
    pub fn playlist_contents(&self, user: &UserId, playlist_id: &str) -> String {
        format!("{}/contents", self.playlist(user, playlist_id))
    }

    /// Share a playlist with other users
    pub fn playlist_share(&self, user: &UserId, playlist_id: &str) -> String {
        format!("{}/share", self.playlist(user, playlist_id))
    }

    /// Sharer's contents of a shared playlist
    pub fn playlist_sync_info(&self, user: &UserId, playlist_id: &str) -> String {
        format!("{}/sync-info", self.playlist(user, playlist_id))
    }

    /// Shared playlists awaiting accept/reject
    pub fn pending_playlists(&self, user: &UserId) -> String {
        format!("{}/shared-playlist", self.playlist_user(user))
    }

    /// Accept or reject a pending playlist; `action` is `accept` or `reject`
    pub fn pending_playlist_action(&self, user: &UserId, playlist_id: &str, action: &str) -> String {
        format!(
            "{}/shared-playlists/{}/{}",
            self.playlist_user(user),
            playlist_id,
            action
        )
    }

    /// Contents recently added to any of a user's playlists
    pub fn recent_playlist_contents(&self, user: &UserId) -> String {
        format!("{}/playlist-contents", self.playlist_user(user))
    }

    // =========================================================================
    // Connections
    // =========================================================================

    /// Accepted connections
    pub fn active_connections(&self, user: &UserId) -> String {
        format!("{}/v1/user/connections/{}/Active", trim(&self.sb_ext_2), user)
    }

    /// Connection requests awaiting action
    pub fn pending_connections(&self, user: &UserId) -> String {
        format!(
            "{}/v1/user/connection/pending-requests/{}",
            trim(&self.sb_ext_2),
            user
        )
    }

    /// Send (POST) and change status of (PATCH) connection requests
    pub fn connection_requests(&self) -> String {
        format!("{}/v1/user/connection/requests", trim(&self.sb_ext_2))
    }

    // =========================================================================
    // Content sources (user registration)
    // =========================================================================

    /// Registration-enabled content sources
    pub fn content_sources(&self) -> String {
        format!("{}/v1/content-sources", trim(&self.sb_ext_2))
    }

    /// One content source
    pub fn content_source(&self, source: &str) -> String {
        format!("{}/{}", self.content_sources(), source)
    }

    /// Users registered with a source (GET list, POST register)
    pub fn content_source_users(&self, source: &str) -> String {
        format!("{}/users", self.content_source(source))
    }

    /// A user's registration with a source
    pub fn content_source_user(&self, source: &str, user: &UserId) -> String {
        format!("{}/{}", self.content_source_users(source), user)
    }

    /// Deregister users from a source
    pub fn content_source_deregistered(&self, source: &str) -> String {
        format!("{}/deregistered-users", self.content_source(source))
    }

    // =========================================================================
    // Terms and conditions
    // =========================================================================

    /// Latest terms; common terms without a user, user terms with one
    pub fn latest_terms(&self, user: Option<&UserId>) -> String {
        let base = format!("{}/v1/latest/terms", trim(&self.tnc));
        match user {
            Some(user) => format!("{}?userId={}", base, user),
            None => base,
        }
    }

    /// Record acceptance of terms
    pub fn accept_terms(&self) -> String {
        format!("{}/v1/terms/accept", trim(&self.tnc))
    }

    /// Post-acceptance processing of a user
    pub fn tnc_postprocessing(&self, user: &UserId) -> String {
        format!("{}/v1/user/{}/postprocessing", trim(&self.sb_ext), user)
    }

    // =========================================================================
    // Goals
    // =========================================================================

    /// A caller's goals (GET) and upsert (POST)
    pub fn user_goals(&self, user: &UserId) -> String {
        format!("{}/v1/users/{}/goals", trim(&self.goals), user)
    }

    /// Common goals offered to a user
    pub fn common_goals(&self, user: &UserId) -> String {
        format!("{}/common", self.user_goals(user))
    }

    /// Sharing status of a goal
    pub fn goal_track_status(&self, user: &UserId, goal_id: &str) -> String {
        format!("{}/{}/track", self.user_goals(user), goal_id)
    }

    // =========================================================================
    // User profile
    // =========================================================================

    /// Profiles by user id
    pub fn profiles_by_wid(&self) -> String {
        format!("{}/user/multi-fetch/wid", trim(&self.profile))
    }

    /// Profiles by email
    pub fn profiles_by_email(&self) -> String {
        format!("{}/user/multi-fetch/email", trim(&self.profile))
    }

    /// Default and assigned roles of a user
    pub fn user_roles(&self, user: &UserId) -> String {
        format!("{}/user/{}/roles", trim(&self.profile), user)
    }

    /// User search within a root organization
    pub fn user_autocomplete(&self, root_org: &str, query: &str) -> String {
        format!(
            "{}/user/autocomplete/{}/all/{}",
            trim(&self.profile),
            root_org,
            query
        )
    }

    // =========================================================================
    // Social and content
    // =========================================================================

    /// A social-service route such as `post/timeline`
    pub fn social(&self, route: &str) -> String {
        format!("{}/{}", trim(&self.social), route.trim_start_matches('/'))
    }

    /// Artifact upload for a content item.
    ///
    /// The content platform takes the whole storage key as one path segment,
    /// so its separators are percent-encoded.
    pub fn artifact_upload(&self, root_org: &str, org: &str, content_id: &str) -> String {
        let key = format!("{}/{}/Public/{}/artifacts", root_org, org, content_id);
        format!(
            "{}/contentv3/upload-live/{}",
            trim(&self.content),
            encode_separators(&key)
        )
    }
}

/// Replace every `/` with `%2F`
pub fn encode_separators(segment: &str) -> String {
    segment.replace('/', "%2F")
}

fn trim(base: &str) -> &str {
    base.trim_end_matches('/')
}

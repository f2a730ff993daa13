/// Playlist transforms between the public shape and the playlist service
use crate::types::{
    ContentItem, CreatePlaylistRequest, PaginatedContents, Playlist, PlaylistContentsRequest,
    PlaylistListing, PlaylistSyncInfo, PlaylistType, UpdatePlaylistRequest, UpstreamAddContents,
    UpstreamCreatePlaylist, UpstreamPlaylist, UpstreamPlaylistDetail, UpstreamRecentContents,
    UpstreamRemoveContents, UpstreamSyncRequest, UpstreamUpdatePlaylist,
};

/// Map a list-shaped upstream playlist.
///
/// `type` is `share` exactly when the record names a sharer.
pub fn to_playlist_v2(upstream: &UpstreamPlaylist) -> Playlist {
    let shared_by = upstream
        .shared_by
        .as_ref()
        .and_then(|s| s.user_id.clone())
        .filter(|id| !id.is_empty());

    Playlist {
        id: upstream.playlist_id.clone(),
        name: upstream.playlist_title.clone(),
        contents: upstream.content_meta.clone(),
        resource_ids: upstream.resource_ids.clone(),
        shared_by_display_name: upstream.shared_by.as_ref().and_then(|s| s.name.clone()),
        shared_on: upstream.shared_on.clone(),
        status: upstream.status.clone(),
        visibility: upstream.visibility.clone(),
        kind: playlist_type(shared_by.as_deref()),
        shared_by,
        created_on: upstream.created_on.clone(),
        duration: None,
        icon: first_icon(&upstream.content_meta),
    }
}

/// Map the single-playlist detail shape; the id comes from the request path.
pub fn to_playlist_v3(upstream: &UpstreamPlaylistDetail, playlist_id: &str) -> Playlist {
    let shared_by = upstream.shared_by.clone().filter(|id| !id.is_empty());

    Playlist {
        id: Some(playlist_id.to_string()),
        name: upstream.playlist_title.clone(),
        contents: upstream.resource_ids.clone(),
        resource_ids: upstream.resource_id_list.clone(),
        shared_by_display_name: None,
        shared_on: None,
        status: upstream.status.clone(),
        visibility: upstream.visibility.clone(),
        kind: playlist_type(shared_by.as_deref()),
        shared_by,
        created_on: upstream.created_on.clone(),
        duration: Some(total_duration(&upstream.resource_ids)),
        icon: first_icon(&upstream.resource_ids),
    }
}

/// Partition owned+shared playlists by kind and attach the pending ones
pub fn to_playlist_listing(
    owned_and_shared: &[UpstreamPlaylist],
    pending: &[UpstreamPlaylist],
) -> PlaylistListing {
    let (share, user) = owned_and_shared
        .iter()
        .map(to_playlist_v2)
        .partition(|p| p.kind == PlaylistType::Share);

    PlaylistListing {
        user,
        share,
        pending: pending.iter().map(to_playlist_v2).collect(),
    }
}

/// Create body for the playlist service
pub fn to_upstream_create(request: &CreatePlaylistRequest) -> UpstreamCreatePlaylist {
    UpstreamCreatePlaylist {
        content_ids: request.content_ids.clone(),
        playlist_title: request.playlist_title.clone(),
        visibility: request.visibility.clone(),
    }
}

/// Add-contents body
pub fn to_upstream_add(request: &PlaylistContentsRequest) -> UpstreamAddContents {
    UpstreamAddContents {
        content_ids: request.content_ids.clone(),
    }
}

/// Remove-contents body
pub fn to_upstream_remove(request: &PlaylistContentsRequest) -> UpstreamRemoveContents {
    UpstreamRemoveContents {
        content: request.content_ids.clone(),
    }
}

/// Title PATCH; contents are projected down to their identifiers
pub fn to_upstream_update(request: &UpdatePlaylistRequest) -> UpstreamUpdatePlaylist {
    UpstreamUpdatePlaylist {
        content_ids: request
            .content_ids
            .iter()
            .map(|c| c.identifier.clone())
            .collect(),
        playlist_title: request.playlist_title.clone(),
        visibility: request.visibility.clone(),
    }
}

/// Push the sharer-only contents into the caller's copy
pub fn to_upstream_sync(info: &PlaylistSyncInfo) -> UpstreamSyncRequest {
    UpstreamSyncRequest {
        content: info.only_sharedby_playlist_content.clone(),
    }
}

/// Recent contents as a single, complete page
pub fn to_recent_contents(upstream: UpstreamRecentContents) -> PaginatedContents {
    PaginatedContents {
        contents: upstream.recent_contents,
        has_more: false,
    }
}

fn playlist_type(shared_by: Option<&str>) -> PlaylistType {
    match shared_by {
        Some(_) => PlaylistType::Share,
        None => PlaylistType::User,
    }
}

fn first_icon(contents: &[ContentItem]) -> Option<String> {
    contents.first().and_then(|c| c.app_icon.clone())
}

/// Sum of content durations; items without one count as zero
fn total_duration(contents: &[ContentItem]) -> f64 {
    contents.iter().filter_map(|c| c.duration).fold(0.0, |total, d| total + d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentRef, SharedBy};
    use proptest::prelude::*;
    use serde_json::json;

    fn content(id: &str, icon: Option<&str>, duration: Option<f64>) -> ContentItem {
        ContentItem {
            app_icon: icon.map(str::to_string),
            duration,
            ..ContentItem::with_identifier(id)
        }
    }

    fn shared(user_id: &str) -> Option<SharedBy> {
        Some(SharedBy {
            user_id: Some(user_id.to_string()),
            name: Some("Grace".to_string()),
        })
    }

    #[test]
    fn v2_user_playlist_scenario() {
        let upstream: UpstreamPlaylist = serde_json::from_value(json!({
            "playlist_title": "My List",
            "content_meta": [],
            "shared_by": null,
            "visibility": "Private",
            "status": "Active"
        }))
        .unwrap();

        let out = serde_json::to_value(to_playlist_v2(&upstream)).unwrap();
        assert_eq!(out["name"], json!("My List"));
        assert_eq!(out["contents"], json!([]));
        assert_eq!(out["icon"], json!(null));
        assert_eq!(out["type"], json!("user"));
        assert_eq!(out["visibility"], json!("Private"));
        assert_eq!(out["status"], json!("Active"));
        assert_eq!(out["sharedBy"], json!(null));
    }

    #[test]
    fn v2_shared_playlist_carries_sharer() {
        let upstream = UpstreamPlaylist {
            playlist_id: Some("p1".to_string()),
            content_meta: vec![content("c1", Some("icon-1"), None), content("c2", Some("icon-2"), None)],
            shared_by: shared("u-7"),
            ..UpstreamPlaylist::default()
        };

        let playlist = to_playlist_v2(&upstream);
        assert_eq!(playlist.kind, PlaylistType::Share);
        assert_eq!(playlist.shared_by.as_deref(), Some("u-7"));
        assert_eq!(playlist.shared_by_display_name.as_deref(), Some("Grace"));
        assert_eq!(playlist.icon.as_deref(), Some("icon-1"));
    }

    #[test]
    fn v2_sharer_without_id_is_user_playlist() {
        let upstream = UpstreamPlaylist {
            shared_by: Some(SharedBy::default()),
            ..UpstreamPlaylist::default()
        };
        let playlist = to_playlist_v2(&upstream);
        assert_eq!(playlist.kind, PlaylistType::User);
        assert!(playlist.shared_by.is_none());
    }

    #[test]
    fn v3_sums_durations_and_takes_id_from_caller() {
        let upstream = UpstreamPlaylistDetail {
            playlist_title: Some("Mix".to_string()),
            resource_ids: vec![
                content("c1", Some("i1"), Some(120.0)),
                content("c2", None, Some(30.5)),
                content("c3", None, None),
            ],
            shared_by: Some("u-2".to_string()),
            ..UpstreamPlaylistDetail::default()
        };

        let playlist = to_playlist_v3(&upstream, "p-9");
        assert_eq!(playlist.id.as_deref(), Some("p-9"));
        assert_eq!(playlist.duration, Some(150.5));
        assert_eq!(playlist.icon.as_deref(), Some("i1"));
        assert_eq!(playlist.kind, PlaylistType::Share);
    }

    #[test]
    fn v3_empty_contents() {
        let playlist = to_playlist_v3(&UpstreamPlaylistDetail::default(), "p");
        assert_eq!(playlist.duration, Some(0.0));
        assert!(playlist.duration.is_some_and(f64::is_sign_positive));
        let out = serde_json::to_string(&playlist).unwrap();
        assert!(out.contains(r#""duration":0.0"#), "{out}");
        assert!(playlist.icon.is_none());
        assert_eq!(playlist.kind, PlaylistType::User);
    }

    #[test]
    fn listing_partitions_by_sharer() {
        let own = UpstreamPlaylist {
            playlist_id: Some("own".to_string()),
            ..UpstreamPlaylist::default()
        };
        let theirs = UpstreamPlaylist {
            playlist_id: Some("theirs".to_string()),
            shared_by: shared("u-3"),
            ..UpstreamPlaylist::default()
        };
        let waiting = UpstreamPlaylist {
            playlist_id: Some("waiting".to_string()),
            shared_by: shared("u-4"),
            ..UpstreamPlaylist::default()
        };

        let listing = to_playlist_listing(&[own, theirs], &[waiting]);
        assert_eq!(listing.user.len(), 1);
        assert_eq!(listing.user[0].id.as_deref(), Some("own"));
        assert_eq!(listing.share[0].id.as_deref(), Some("theirs"));
        assert_eq!(listing.pending[0].id.as_deref(), Some("waiting"));
    }

    #[test]
    fn request_transforms_use_upstream_names() {
        let create: CreatePlaylistRequest = serde_json::from_value(json!({
            "playlist_title": "New",
            "content_ids": ["a", "b"],
            "visibility": "Public",
            "shareWith": ["u2"]
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(to_upstream_create(&create)).unwrap(),
            json!({ "content_ids": ["a", "b"], "playlist_title": "New", "visibility": "Public" })
        );

        let contents = PlaylistContentsRequest {
            content_ids: vec!["a".to_string()],
        };
        assert_eq!(
            serde_json::to_value(to_upstream_add(&contents)).unwrap(),
            json!({ "content_ids": ["a"] })
        );
        assert_eq!(
            serde_json::to_value(to_upstream_remove(&contents)).unwrap(),
            json!({ "content": ["a"] })
        );
    }

    #[test]
    fn update_projects_contents_to_identifiers() {
        let update = UpdatePlaylistRequest {
            playlist_title: "Renamed".to_string(),
            content_ids: vec![
                ContentRef { identifier: "x".to_string() },
                ContentRef { identifier: "y".to_string() },
            ],
            visibility: None,
        };
        let out = to_upstream_update(&update);
        assert_eq!(out.content_ids, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(out.playlist_title, "Renamed");
    }

    #[test]
    fn sync_and_recent() {
        let info = PlaylistSyncInfo {
            only_sharedby_playlist_content: vec![json!("c1")],
        };
        assert_eq!(to_upstream_sync(&info).content, vec![json!("c1")]);

        let recent = to_recent_contents(UpstreamRecentContents {
            recent_contents: vec![json!({ "identifier": "c9" })],
        });
        assert!(!recent.has_more);
        assert_eq!(recent.contents.len(), 1);
    }

    proptest! {
        #[test]
        fn share_iff_sharer_present(sharer in proptest::option::of("[a-z0-9]{0,8}")) {
            let upstream = UpstreamPlaylist {
                shared_by: sharer.as_deref().and_then(|id| shared(id)),
                ..UpstreamPlaylist::default()
            };
            let playlist = to_playlist_v2(&upstream);
            let has_sharer = sharer.as_deref().is_some_and(|id| !id.is_empty());
            prop_assert_eq!(playlist.kind == PlaylistType::Share, has_sharer);
            prop_assert_eq!(playlist.shared_by.is_some(), has_sharer);
        }

        #[test]
        fn duration_is_sum_of_items(durations in proptest::collection::vec(0u32..10_000, 0..20)) {
            let contents: Vec<ContentItem> = durations
                .iter()
                .map(|d| content("c", None, Some(f64::from(*d))))
                .collect();
            let upstream = UpstreamPlaylistDetail {
                resource_ids: contents,
                ..UpstreamPlaylistDetail::default()
            };
            let expected: f64 = durations.iter().map(|d| f64::from(*d)).sum();
            prop_assert_eq!(to_playlist_v3(&upstream, "p").duration, Some(expected));
        }
    }
}

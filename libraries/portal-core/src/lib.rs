//! Portal Core
//!
//! Request-scoped building blocks shared by the portal gateway server and
//! its upstream clients.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Identity**: `CallerIdentity` resolved from the `wid` header or token claims
//! - **Tenant**: the `(org, rootOrg)` pair every per-tenant upstream call carries
//! - **Endpoints**: URL builders over the configured upstream base URLs
//! - **Types**: public DTOs and the private wire shapes of each upstream service
//! - **Transforms**: pure mappings between the two
//! - **Aggregators**: fan-out helpers that merge several upstream calls
//! - **Social**: the table of forwarded social/forum routes
//!
//! # Example
//!
//! ```rust
//! use portal_core::transform::playlist::to_playlist_v2;
//! use portal_core::types::{PlaylistType, UpstreamPlaylist};
//!
//! let upstream: UpstreamPlaylist = serde_json::from_value(serde_json::json!({
//!     "playlist_title": "My List",
//!     "content_meta": [],
//!     "shared_by": null,
//!     "visibility": "Private",
//!     "status": "Active"
//! }))
//! .unwrap();
//!
//! let playlist = to_playlist_v2(&upstream);
//! assert_eq!(playlist.kind, PlaylistType::User);
//! assert!(playlist.icon.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Fan-out helpers merging several upstream calls
pub mod aggregate;
/// Upstream base URLs and URL builders
pub mod endpoints;
/// Validation errors
pub mod error;
/// Caller identity resolution
pub mod identity;
/// Forwarded social routes
pub mod social;
/// Tenant headers
pub mod tenant;
/// Upstream capability traits
pub mod traits;
/// Mappings between upstream and public shapes
pub mod transform;
/// Public DTOs and upstream wire shapes
pub mod types;

pub use endpoints::UpstreamBases;
pub use error::{Result, ValidationError, ERROR_NO_ORG_DATA, ERROR_NO_USER_ID};
pub use identity::{resolve, AuthContext, CallerIdentity, TokenClaims};
pub use tenant::TenantContext;
pub use traits::{ConnectionSource, PlaylistSource, TermsSource};
pub use types::UserId;

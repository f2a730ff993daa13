//! Portal Upstream
//!
//! HTTP clients for the services the portal gateway sits in front of.
//!
//! # Features
//!
//! - **Playlists**: listing, detail, create/update/delete, sharing, sync
//! - **Connections**: active and pending connections, requests
//! - **Terms**: user and common terms, acceptance, post-processing
//! - **Goals**: user and common goals, upsert, share tracking
//! - **Profiles**: multi-fetch, roles, autocomplete
//! - **Social**: route forwarding and artifact upload
//! - **Registration**: content-source user registration
//!
//! Every call carries the tenant headers and a timeout. Non-success answers
//! surface as [`UpstreamError::Status`] with the upstream body preserved.
//!
//! # Example
//!
//! ```ignore
//! use portal_core::{TenantContext, UpstreamBases, UserId};
//! use portal_upstream::{PortalClient, UpstreamConfig};
//!
//! let client = PortalClient::new(UpstreamConfig::new(UpstreamBases::single_host(
//!     "http://localhost:9000",
//! )))?;
//!
//! let tenant = TenantContext::new("org", "root");
//! let playlists = client
//!     .playlists()
//!     .owned(&UserId::new("u1"), &tenant)
//!     .await?;
//! println!("{} playlists", playlists.len());
//! ```

mod client;
mod connections;
mod error;
mod goals;
mod playlists;
mod profiles;
mod registration;
mod social;
mod terms;
mod types;

// Re-export main types
pub use client::{PortalClient, LANG_HEADER};
pub use error::{Result, UpstreamError};
pub use types::{
    Artifact, Forwarded, SharedPlaylistAction, UpstreamConfig, DEFAULT_SOCIAL_TIMEOUT,
    DEFAULT_TIMEOUT,
};

// Re-export sub-clients for direct use if needed
pub use connections::ConnectionClient;
pub use goals::GoalClient;
pub use playlists::PlaylistClient;
pub use profiles::ProfileClient;
pub use registration::RegistrationClient;
pub use social::SocialClient;
pub use terms::TermsClient;

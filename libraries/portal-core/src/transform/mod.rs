//! Shape transformers.
//!
//! Pure, total mappings between public DTOs and upstream wire shapes.
//! Missing optional upstream fields become empty sequences or `None`;
//! nothing in here can fail.

/// Connection rows
pub mod connection;
/// Display content type
pub mod content;
/// Goals, upserts and share tracking
pub mod goal;
/// Playlists and playlist bodies
pub mod playlist;
/// Terms records and acceptance
pub mod tnc;

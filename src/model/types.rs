//! Typed records consumed from the metadata service, plus core enums
//!
//! The data-fetch layer owns retrieval of these records; the playback core
//! only consumes them. Field names in the serialized form match the backend's
//! JSON (camelCase where the backend uses it), so queue blobs written by
//! other clients of the same store remain readable.

use serde::{Deserialize, Serialize};

/// A music track from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Catalog identity, unique within a catalog. Duplicates of the same
    /// track may still appear in a queue.
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub album: String,
    #[serde(rename = "albumArt")]
    pub album_art: String,
    /// Raw timed lyric text, when the catalog has it. See [`crate::lyrics`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
}

/// A video from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// A raw file entry from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Filei {
    pub id: i64,
    pub filepath: String,
    pub file_format: String,
}

/// A named, catalog-side playlist referencing tracks by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub tracks: Vec<i64>,
    /// Creation time, epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// What kind of media the bound adapter is playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

/// Where the controller is in a playback lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// No track has been selected yet.
    Idle,
    /// A source is assigned and the controller awaits adapter readiness.
    Loading,
    Playing,
    /// Playback halted: explicit stop, natural end, or a failed load.
    Stopped,
}

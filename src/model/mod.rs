//! Model module - Playback state and data types
//!
//! This module contains the data structures and state owned by the playback
//! core. It is organized into submodules by responsibility:
//!
//! - `types`: Catalog records and core enums
//! - `playback`: The dependency-injected playback state object
//! - `queue`: Versioned durable schema for the playback queue

mod playback;
mod queue;
mod types;

// Re-export all public types for convenient access
pub use playback::PlayerModel;
pub use queue::{QUEUE_SCHEMA_VERSION, StoredQueue};
pub use types::{Filei, MediaKind, PlaybackPhase, Playlist, Track, Video};

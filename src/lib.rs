//! Client-side media-playback orchestration core
//!
//! This crate owns the "what is playing, what is next, and is it ready"
//! state for an audio/video player embedded in a larger application, and it
//! keeps the user-curated playback queue durable across sessions. It does no
//! audio decoding and no network transport of its own: the embedding app
//! supplies a [`MediaAdapter`] (the playable element) and a
//! [`KeyValueStore`] (the local-storage analogue), and the controller drives
//! both.
//!
//! - [`PlayerController`]: playback state machine and queue sequencing
//! - [`PersistentQueue`]: durable, write-through playback queue
//! - [`lyrics::parse_lyrics`]: timed-lyric parser for synchronized display

pub mod adapter;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod lyrics;
pub mod model;
pub mod queue;
pub mod storage;

pub use adapter::{AdapterEvent, MediaAdapter};
pub use config::PlayerConfig;
pub use controller::PlayerController;
pub use error::{PlayerError, StorageError};
pub use lyrics::{LyricCue, parse_lyrics};
pub use model::{Filei, MediaKind, PlaybackPhase, PlayerModel, Playlist, StoredQueue, Track, Video};
pub use queue::PersistentQueue;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};

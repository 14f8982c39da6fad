//! Playback state object owned by the controller
//!
//! Explicitly constructed and handed to the controller rather than living in
//! a process-wide singleton, so tests (and multi-player hosts) can run
//! independent instances side by side. All accessors are direct and
//! synchronous; reactive observation belongs to the UI layer, not here.

use std::sync::Arc;

use crate::adapter::MediaAdapter;

use super::types::{MediaKind, PlaybackPhase, Track};

/// The "what is playing, what is next, and is it ready" state.
///
/// Invariant: `playing == true` implies both a current track and a bound
/// adapter. The controller is the sole mutator.
pub struct PlayerModel {
    kind: Option<MediaKind>,
    playing: bool,
    current_track: Option<Track>,
    adapter: Option<Arc<dyn MediaAdapter>>,
    expanded: bool,
    phase: PlaybackPhase,
    /// Monotonically increasing marker for playback attempts. Event handlers
    /// from a superseded attempt observe the mismatch and go inert.
    generation: u64,
}

impl PlayerModel {
    pub fn new() -> Self {
        Self {
            kind: None,
            playing: false,
            current_track: None,
            adapter: None,
            expanded: false,
            phase: PlaybackPhase::Idle,
            generation: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn kind(&self) -> Option<MediaKind> {
        self.kind
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn adapter(&self) -> Option<Arc<dyn MediaAdapter>> {
        self.adapter.clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `generation` identifies the newest playback attempt.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    // ========================================================================
    // Mutations (controller only)
    // ========================================================================

    /// Bind a new media adapter, replacing any prior binding.
    pub fn bind_adapter(&mut self, adapter: Arc<dyn MediaAdapter>) {
        self.adapter = Some(adapter);
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Start a new playback attempt: adopt the track and kind immediately
    /// (optimistic UI update), enter `Loading`, and return the attempt's
    /// generation token.
    pub fn begin_attempt(&mut self, track: Track, kind: MediaKind) -> u64 {
        debug_assert!(self.adapter.is_some(), "attempt begun with no adapter bound");
        self.generation += 1;
        self.current_track = Some(track);
        self.kind = Some(kind);
        self.playing = false;
        self.phase = PlaybackPhase::Loading;
        self.generation
    }

    /// The attempt's source became ready and the adapter acknowledged play.
    pub fn mark_playing(&mut self) {
        debug_assert!(self.current_track.is_some() && self.adapter.is_some());
        self.playing = true;
        self.phase = PlaybackPhase::Playing;
    }

    /// The attempt failed before or during start. The current track is
    /// retained so the UI keeps its context while conveying failure.
    pub fn attempt_failed(&mut self) {
        self.playing = false;
        self.phase = PlaybackPhase::Stopped;
    }

    /// Playback halted: explicit stop or the adapter signalled the end of
    /// the source.
    pub fn stop(&mut self) {
        self.playing = false;
        self.phase = PlaybackPhase::Stopped;
    }
}

impl Default for PlayerModel {
    fn default() -> Self {
        Self::new()
    }
}

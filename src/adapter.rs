//! Media adapter capability consumed by the playback controller
//!
//! The adapter is the external playable element (an HTML media element, a
//! native decoder session, a test double). The controller only ever drives it
//! through this trait: assign a source, await readiness, start and pause
//! playback, observe lifecycle events.

use futures::future::BoxFuture;
use tokio::sync::broadcast;

/// Lifecycle events emitted by a media adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdapterEvent {
    /// The assigned source is decodable and playback can begin.
    CanPlay,
    /// The source failed to load or decode.
    Error(String),
    /// Playback of the current source ran to completion.
    Ended,
}

/// The playable-element capability an embedding application supplies.
///
/// `subscribe` hands out an independent receiver per call; the controller
/// takes one per playback attempt and drops it once the attempt's generation
/// goes stale, so stale attempts never hold live subscriptions.
pub trait MediaAdapter: Send + Sync {
    /// Assign the media source URL. Must not block.
    fn set_source(&self, url: &str);

    /// Start playback of the assigned source. Resolves once the underlying
    /// element has acknowledged the play request.
    fn play(&self) -> BoxFuture<'_, anyhow::Result<()>>;

    /// Pause playback immediately.
    fn pause(&self);

    /// Subscribe to lifecycle events emitted from this point on.
    fn subscribe(&self) -> broadcast::Receiver<AdapterEvent>;
}

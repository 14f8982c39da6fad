//! Controller module - Playback orchestration logic
//!
//! This module contains the playback controller: the single authority over
//! "what plays now". It mediates between UI commands, the bound media
//! adapter, and the persistent queue. It is organized into submodules by
//! responsibility:
//!
//! - `playback`: Playback attempts (load, readiness wait, start, stop)
//! - `sequencing`: Queue traversal (next/previous, auto-advance on ended)

mod playback;
mod sequencing;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::adapter::MediaAdapter;
use crate::config::PlayerConfig;
use crate::model::{PlaybackPhase, PlayerModel, Track};
use crate::queue::PersistentQueue;

#[derive(Clone)]
pub struct PlayerController {
    pub(crate) model: Arc<Mutex<PlayerModel>>,
    pub(crate) queue: PersistentQueue,
    pub(crate) config: Arc<PlayerConfig>,
}

impl PlayerController {
    pub fn new(model: Arc<Mutex<PlayerModel>>, queue: PersistentQueue, config: PlayerConfig) -> Self {
        Self {
            model,
            queue,
            config: Arc::new(config),
        }
    }

    /// Bind a new media adapter and reset the queue.
    ///
    /// Rebinding a player starts a fresh playback session, so the persisted
    /// queue is cleared as part of the switch.
    pub async fn set_player(&self, adapter: Arc<dyn MediaAdapter>) {
        let mut model = self.model.lock().await;
        model.bind_adapter(adapter);
        drop(model);

        tracing::info!("media adapter bound, resetting playback queue");
        if let Err(e) = self.queue.reset() {
            tracing::error!(error = %e, "failed to reset queue while binding adapter");
        }
    }

    /// The currently bound adapter, if any. No effect on playback state.
    pub async fn get_player(&self) -> Option<Arc<dyn MediaAdapter>> {
        self.model.lock().await.adapter()
    }

    pub fn queue(&self) -> &PersistentQueue {
        &self.queue
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub async fn toggle_expanded(&self) {
        self.model.lock().await.toggle_expanded();
    }

    pub async fn set_expanded(&self, expanded: bool) {
        self.model.lock().await.set_expanded(expanded);
    }

    pub async fn is_expanded(&self) -> bool {
        self.model.lock().await.is_expanded()
    }

    // ========================================================================
    // State snapshots
    // ========================================================================

    pub async fn is_playing(&self) -> bool {
        self.model.lock().await.is_playing()
    }

    pub async fn current_track(&self) -> Option<Track> {
        self.model.lock().await.current_track().cloned()
    }

    pub async fn phase(&self) -> PlaybackPhase {
        self.model.lock().await.phase()
    }

    /// Queue snapshot for sequencing. A storage failure here is absorbed: it
    /// is logged and sequencing sees an empty queue; direct callers of the
    /// queue API still get the typed error.
    pub(crate) fn queue_snapshot(&self) -> Vec<Track> {
        match self.queue.tracks() {
            Ok(tracks) => tracks,
            Err(e) => {
                tracing::error!(error = %e, "failed to read queue for sequencing");
                Vec::new()
            }
        }
    }
}

//! Playback attempt lifecycle: load, readiness wait, start, stop

use tokio::sync::broadcast;

use crate::adapter::AdapterEvent;
use crate::error::PlayerError;
use crate::model::{MediaKind, Track};

use super::PlayerController;

impl PlayerController {
    /// Play a music track. Shorthand for [`Self::play_single`] with
    /// [`MediaKind::Audio`].
    pub async fn play_music(&self, track: Track) {
        self.play_single(track, MediaKind::Audio).await;
    }

    /// Play a track on the bound adapter.
    ///
    /// The current track and kind are adopted immediately so the UI updates
    /// optimistically; the playing flag only goes up once the adapter has
    /// signalled readiness and acknowledged the play request. All failures
    /// are absorbed here and reported via diagnostics, never to the caller.
    pub async fn play_single(&self, track: Track, kind: MediaKind) {
        let mut model = self.model.lock().await;

        // Switching kind tears down the prior session without waiting for it.
        if model.is_playing() && model.kind() != Some(kind) {
            if let Some(prior) = model.adapter() {
                tracing::debug!(
                    prior_kind = ?model.kind(),
                    new_kind = ?kind,
                    "media kind switch, pausing prior session"
                );
                prior.pause();
            }
        }

        let Some(adapter) = model.adapter() else {
            tracing::warn!(
                track_id = track.id,
                title = %track.title,
                "playback requested with no media adapter bound"
            );
            return;
        };

        let generation = model.begin_attempt(track.clone(), kind);
        drop(model);

        let url = self.config.stream_url(track.id);
        let mut events = adapter.subscribe();
        adapter.set_source(&url);
        tracing::debug!(track_id = track.id, url = %url, generation, "source assigned, awaiting readiness");

        if let Err(e) = self.await_readiness(&mut events).await {
            let mut model = self.model.lock().await;
            if model.is_current(generation) {
                model.attempt_failed();
                tracing::warn!(track_id = track.id, generation, error = %e, "media load failed");
            } else {
                tracing::debug!(generation, "superseded attempt failed, ignoring");
            }
            return;
        }

        // Readiness can resolve after a newer attempt has started; a stale
        // attempt must not touch the adapter or the state.
        if !self.model.lock().await.is_current(generation) {
            tracing::debug!(generation, "attempt superseded before start, going inert");
            return;
        }

        if let Err(e) = adapter.play().await {
            let mut model = self.model.lock().await;
            if model.is_current(generation) {
                model.attempt_failed();
            }
            tracing::error!(track_id = track.id, error = %e, "adapter rejected play request");
            return;
        }

        let mut model = self.model.lock().await;
        if !model.is_current(generation) {
            return;
        }
        model.mark_playing();
        drop(model);

        tracing::info!(track_id = track.id, title = %track.title, "playback started");

        // The attempt's subscription has seen every event since before the
        // source was assigned; hand it to the ended watcher.
        self.watch_for_ended(events, generation);
    }

    /// Enqueue every track in order, then play the first.
    pub async fn play_music_list(&self, tracks: Vec<Track>) {
        for track in &tracks {
            if let Err(e) = self.queue.add(track.clone()) {
                tracing::error!(track_id = track.id, error = %e, "failed to enqueue track");
            }
        }
        if let Some(first) = tracks.into_iter().next() {
            self.play_music(first).await;
        }
    }

    /// Pause the adapter and clear the playing flag. The current track is
    /// retained.
    pub async fn stop(&self) {
        let mut model = self.model.lock().await;
        if let Some(adapter) = model.adapter() {
            adapter.pause();
        }
        model.stop();
        tracing::debug!("playback stopped");
    }

    /// Wait for the adapter to report the assigned source playable, bounded
    /// by the configured readiness timeout.
    async fn await_readiness(
        &self,
        events: &mut broadcast::Receiver<AdapterEvent>,
    ) -> Result<(), PlayerError> {
        let wait = async {
            loop {
                match events.recv().await {
                    Ok(AdapterEvent::CanPlay) => return Ok(()),
                    Ok(AdapterEvent::Error(message)) => {
                        return Err(PlayerError::MediaLoad(message));
                    }
                    Ok(AdapterEvent::Ended) => continue,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "adapter event stream lagged during load");
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        return Err(PlayerError::MediaLoad(
                            "adapter event stream closed".to_string(),
                        ));
                    }
                }
            }
        };

        match tokio::time::timeout(self.config.readiness_timeout(), wait).await {
            Ok(result) => result,
            Err(_) => Err(PlayerError::ReadinessTimeout),
        }
    }
}

//! Queue traversal: next/previous and automatic advance on track end

use tokio::sync::broadcast;

use crate::adapter::AdapterEvent;

use super::PlayerController;

impl PlayerController {
    /// Play the queue successor of the current track, or do nothing if the
    /// current track is last (no wraparound) or not in the queue.
    pub async fn play_next(&self) {
        self.play_adjacent(1).await;
    }

    /// Play the queue predecessor of the current track, or do nothing at the
    /// first position.
    pub async fn play_previous(&self) {
        self.play_adjacent(-1).await;
    }

    async fn play_adjacent(&self, step: i64) {
        let Some(current) = self.model.lock().await.current_track().cloned() else {
            tracing::debug!("sequencing requested with no current track");
            return;
        };

        let tracks = self.queue_snapshot();
        let Some(position) = tracks.iter().position(|t| t.id == current.id) else {
            tracing::debug!(track_id = current.id, "current track is not in the queue");
            return;
        };

        let target = position as i64 + step;
        if target < 0 || target as usize >= tracks.len() {
            // Queue boundary is silently absorbed.
            tracing::debug!(track_id = current.id, step, "queue boundary reached");
            return;
        }

        self.play_music(tracks[target as usize].clone()).await;
    }

    /// Watch the attempt's event stream for the end of the source and
    /// advance to the queue successor.
    ///
    /// The watcher is tied to one playback attempt: any event observed after
    /// a newer attempt has started makes it exit, dropping its subscription,
    /// so watchers never accumulate across track switches.
    pub(crate) fn watch_for_ended(
        &self,
        mut events: broadcast::Receiver<AdapterEvent>,
        generation: u64,
    ) {
        let controller = self.clone();
        tokio::spawn(async move {
            loop {
                let event = match events.recv().await {
                    Ok(event) => event,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => return,
                };

                if !controller.model.lock().await.is_current(generation) {
                    tracing::debug!(generation, "ended watcher for stale attempt, exiting");
                    return;
                }

                if event == AdapterEvent::Ended {
                    tracing::debug!(generation, "source ended, advancing");
                    controller.model.lock().await.stop();
                    controller.advance_after_ended().await;
                    return;
                }
            }
        });
    }

    /// The current track ran to completion: play its queue successor, or
    /// remain stopped if it was last.
    async fn advance_after_ended(&self) {
        let Some(current) = self.model.lock().await.current_track().cloned() else {
            return;
        };

        let tracks = self.queue_snapshot();
        let successor = tracks
            .iter()
            .position(|t| t.id == current.id)
            .and_then(|position| tracks.get(position + 1));

        match successor {
            Some(next) => {
                tracing::info!(from = current.id, to = next.id, "auto-advancing to next track");
                self.play_music(next.clone()).await;
            }
            None => {
                tracing::debug!(track_id = current.id, "last track ended, staying stopped");
            }
        }
    }
}

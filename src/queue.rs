//! Durable playback queue with write-through persistence
//!
//! The queue is an ordered list of tracks the user has starred for
//! sequential playback. Every mutation is written through to the key-value
//! store before observers are notified, so the durable copy never lags the
//! in-memory copy by more than one operation, and `tracks()` re-reads the
//! store so writes from other execution contexts sharing it are observed.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::error::StorageError;
use crate::model::{StoredQueue, Track};
use crate::storage::KeyValueStore;

/// Durable FIFO track queue. Clones share state, like the controller handle.
#[derive(Clone)]
pub struct PersistentQueue {
    store: Arc<dyn KeyValueStore>,
    key: String,
    /// `None` until the durable state has been loaded or adopted.
    tracks: Arc<Mutex<Option<Vec<Track>>>>,
    observers: Arc<watch::Sender<Vec<Track>>>,
}

impl PersistentQueue {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let (observers, _) = watch::channel(Vec::new());
        Self {
            store,
            key: key.into(),
            tracks: Arc::new(Mutex::new(None)),
            observers: Arc::new(observers),
        }
    }

    /// Adopt the durable state: load it if the key is present, otherwise
    /// write and adopt an empty queue. Idempotent.
    pub fn initialize(&self) -> Result<(), StorageError> {
        self.sync_from_store()?;
        Ok(())
    }

    /// The ordered tracks, re-synchronized from the store first so the call
    /// always reflects the latest durable value.
    pub fn tracks(&self) -> Result<Vec<Track>, StorageError> {
        self.sync_from_store()
    }

    /// Append a track (duplicates permitted) and write the queue through.
    pub fn add(&self, track: Track) -> Result<(), StorageError> {
        let mut current = match self.adopted()? {
            Some(tracks) => tracks,
            // First use in this context: load whatever is durable.
            None => self.sync_from_store()?,
        };
        current.push(track);
        self.write_and_publish(current)
    }

    /// Replace the queue with an empty one, written through immediately.
    pub fn reset(&self) -> Result<(), StorageError> {
        self.write_and_publish(Vec::new())
    }

    /// Reactive observation for the UI layer. The receiver sees every
    /// published state after the corresponding durable write.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Track>> {
        self.observers.subscribe()
    }

    fn adopted(&self) -> Result<Option<Vec<Track>>, StorageError> {
        let tracks = self.tracks.lock().unwrap_or_else(|e| e.into_inner());
        Ok(tracks.clone())
    }

    /// Read the durable value, adopting it as the in-memory state. An absent
    /// key means uninitialized: adopt an empty queue and write it.
    fn sync_from_store(&self) -> Result<Vec<Track>, StorageError> {
        let loaded = match self.store.get(&self.key)? {
            Some(raw) => StoredQueue::decode(&raw)?.tracks,
            None => {
                tracing::debug!(key = %self.key, "no durable queue found, adopting empty");
                self.store.set(&self.key, &StoredQueue::empty().encode()?)?;
                Vec::new()
            }
        };
        let mut tracks = self.tracks.lock().unwrap_or_else(|e| e.into_inner());
        *tracks = Some(loaded.clone());
        Ok(loaded)
    }

    fn write_and_publish(&self, updated: Vec<Track>) -> Result<(), StorageError> {
        let stored = StoredQueue {
            tracks: updated.clone(),
            ..StoredQueue::empty()
        };
        self.store.set(&self.key, &stored.encode()?)?;
        let mut tracks = self.tracks.lock().unwrap_or_else(|e| e.into_inner());
        *tracks = Some(updated.clone());
        drop(tracks);
        self.observers.send_replace(updated);
        Ok(())
    }
}

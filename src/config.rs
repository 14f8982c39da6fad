//! Player configuration supplied by the embedding application

use std::time::Duration;

use serde::Deserialize;

/// Address of the streaming backend when the embedding app provides none.
const DEFAULT_STREAM_BASE_URL: &str = "http://127.0.0.1:8000";

/// Durable store key the playback queue is persisted under.
const DEFAULT_STORE_KEY: &str = "stars";

const DEFAULT_READINESS_TIMEOUT_MS: u64 = 10_000;

/// Configuration for the playback core.
///
/// All fields have defaults matching the original deployment, so an embedding
/// app can use `PlayerConfig::default()` or deserialize a partial config.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Base URL of the media streaming service.
    pub stream_base_url: String,
    /// Upper bound on the wait for an adapter readiness signal.
    pub readiness_timeout_ms: u64,
    /// Key the queue is stored under in the key-value store.
    pub store_key: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            stream_base_url: DEFAULT_STREAM_BASE_URL.to_string(),
            readiness_timeout_ms: DEFAULT_READINESS_TIMEOUT_MS,
            store_key: DEFAULT_STORE_KEY.to_string(),
        }
    }
}

impl PlayerConfig {
    /// Audio source URL for a track, derived from its catalog identity.
    pub fn stream_url(&self, track_id: i64) -> String {
        format!(
            "{}/stream/music/{}",
            self.stream_base_url.trim_end_matches('/'),
            track_id
        )
    }

    pub fn readiness_timeout(&self) -> Duration {
        Duration::from_millis(self.readiness_timeout_ms)
    }
}

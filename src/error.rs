//! Typed failure taxonomy for the playback core

use thiserror::Error;

/// Failures raised by the durable queue store.
///
/// The durable value may be shared with other execution contexts, so a
/// corrupt blob is a real runtime condition, not a programming error. It is
/// surfaced to the caller instead of being swallowed into an empty queue.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("stored queue data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("unsupported queue schema version {0}")]
    UnsupportedVersion(u32),

    #[error("storage backend error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures internal to a playback attempt.
///
/// These never cross the controller boundary; the controller absorbs them
/// and reports via diagnostics only.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("no media adapter is bound")]
    NotBound,

    #[error("media source failed to load: {0}")]
    MediaLoad(String),

    #[error("timed out waiting for media readiness")]
    ReadinessTimeout,
}

//! Versioned durable schema for the playback queue

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

use super::types::Track;

pub const QUEUE_SCHEMA_VERSION: u32 = 1;

fn schema_version() -> u32 {
    QUEUE_SCHEMA_VERSION
}

/// The durable queue blob.
///
/// Version 1 blobs are `{"version": 1, "tracks": [...]}`. The original client
/// wrote bare `{"tracks": [...]}`; those deserialize as version 1 via the
/// serde default, so existing stores load without migration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredQueue {
    #[serde(default = "schema_version")]
    pub version: u32,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl StoredQueue {
    pub fn empty() -> Self {
        Self {
            version: QUEUE_SCHEMA_VERSION,
            tracks: Vec::new(),
        }
    }

    /// Parse a durable value, validating the schema version.
    pub fn decode(raw: &str) -> Result<Self, StorageError> {
        let stored: Self = serde_json::from_str(raw)?;
        if stored.version != QUEUE_SCHEMA_VERSION {
            return Err(StorageError::UnsupportedVersion(stored.version));
        }
        Ok(stored)
    }

    pub fn encode(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }
}

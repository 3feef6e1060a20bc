//! Versioned envelope for persisted state.
//!
//! Current format: `{ "version": 1, "state": { ... } }`. A blob without an
//! envelope is the legacy bare-state format and is reported as version 0.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version written by [`encode`].
pub const SNAPSHOT_VERSION: u32 = 1;

/// Version reported for blobs written before the envelope existed.
pub const LEGACY_VERSION: u32 = 0;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to parse persisted state: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Persisted state has version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Failed to serialize state: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Serialize)]
struct EnvelopeRef<'a, S> {
    version: u32,
    state: &'a S,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    state: serde_json::Value,
}

/// A successfully decoded snapshot.
#[derive(Debug)]
pub struct Decoded<S> {
    pub state: S,
    pub version: u32,
}

impl<S> Decoded<S> {
    /// True when the blob predates the current format and will be rewritten
    /// on the next save.
    pub fn needs_upgrade(&self) -> bool {
        self.version != SNAPSHOT_VERSION
    }
}

pub fn encode<S: Serialize>(state: &S) -> Result<String, SnapshotError> {
    serde_json::to_string(&EnvelopeRef {
        version: SNAPSHOT_VERSION,
        state,
    })
    .map_err(SnapshotError::Serialize)
}

pub fn decode<S: DeserializeOwned>(blob: &str) -> Result<Decoded<S>, SnapshotError> {
    let value: serde_json::Value = serde_json::from_str(blob).map_err(SnapshotError::Parse)?;

    let is_envelope = value
        .as_object()
        .is_some_and(|obj| obj.contains_key("version") && obj.contains_key("state"));

    if !is_envelope {
        let state = serde_json::from_value(value).map_err(SnapshotError::Parse)?;
        return Ok(Decoded {
            state,
            version: LEGACY_VERSION,
        });
    }

    let envelope: Envelope = serde_json::from_value(value).map_err(SnapshotError::Parse)?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: envelope.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    let state = serde_json::from_value(envelope.state).map_err(SnapshotError::Parse)?;
    Ok(Decoded {
        state,
        version: envelope.version,
    })
}

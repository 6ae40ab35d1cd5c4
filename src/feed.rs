//! Reading and writing feeds as JSON.
//!
//! The feed API returns either a bare array of events or an object whose
//! `data` field holds the array. Both are accepted; output is always a bare
//! array. Event order is preserved exactly.

use std::io::{Read, Write};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::events::{EventSequence, GameEvent};

/// Errors from loading or saving a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed feed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feed i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The feed API's `{"data": [...]}` wrapper.
#[derive(Deserialize)]
struct Envelope {
    data: Vec<GameEvent>,
}

/// Decode either document shape, picking it by the first non-whitespace
/// byte so serde_json reports errors at their own line and column.
fn decode(bytes: &[u8]) -> Result<EventSequence, FeedError> {
    let first = bytes.iter().find(|b| !b.is_ascii_whitespace());
    let events = match first {
        Some(b'{') => serde_json::from_slice::<Envelope>(bytes)?.data,
        _ => serde_json::from_slice::<Vec<GameEvent>>(bytes)?,
    };
    debug!(events = events.len(), "loaded feed");
    Ok(events)
}

/// Decode a feed from a JSON string.
pub fn from_json(json: &str) -> Result<EventSequence, FeedError> {
    decode(json.as_bytes())
}

/// Decode a feed from a reader.
pub fn from_reader(mut reader: impl Read) -> Result<EventSequence, FeedError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}

/// Encode a feed as a JSON array.
pub fn to_json(events: &[GameEvent]) -> Result<String, FeedError> {
    Ok(serde_json::to_string(events)?)
}

/// Write a feed as a pretty-printed JSON array.
pub fn to_writer(mut writer: impl Write, events: &[GameEvent]) -> Result<(), FeedError> {
    serde_json::to_writer_pretty(&mut writer, events)?;
    writer.flush()?;
    Ok(())
}

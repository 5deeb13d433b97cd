use chrono::{DateTime, Utc};
use gapfill_api_core::{Key, ValueKind};
use thiserror::Error;

/// Every way an interpolation call can be rejected. Errors abort the whole
/// call; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("unsupported interpolation mode: '{0}'")]
    UnsupportedMode(String),
    #[error("all non-null items must be numbers (int or float); entry {key} holds a {found} value")]
    NotNumeric { key: Key, found: ValueKind },
    #[error("timestamp of entry {key} cannot be parsed: {reason}")]
    InvalidTimestamp { key: Key, reason: String },
    #[error("neighbours of entry {key} share the timestamp {at}; time weighting is undefined")]
    DegenerateInterval { key: Key, at: DateTime<Utc> },
    #[error("invalid value path: {0}")]
    InvalidPath(String),
    #[error("invalid interpolation config: {0}")]
    InvalidConfig(String),
}

//! Sequence keys. Keys are opaque to interpolation: position in the sequence,
//! not the key, decides neighbourhood. The key only matters when it doubles
//! as a timestamp.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Implicit or explicit numeric index
    Index(i64),
    /// String identifier (possibly a date string)
    Name(String),
    /// Native point in time
    Instant(DateTime<FixedOffset>),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(s) => write!(f, "'{s}'"),
            Key::Instant(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

impl From<i64> for Key {
    fn from(v: i64) -> Self {
        Key::Index(v)
    }
}

impl From<usize> for Key {
    fn from(v: usize) -> Self {
        Key::Index(v as i64)
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Key::Name(v.to_string())
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Key::Name(v)
    }
}

impl From<DateTime<FixedOffset>> for Key {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Key::Instant(v)
    }
}

//! ValuePath parsing, reading and non-destructive writing.
//!
//! Grammar (dotted, container-agnostic):
//!   segment(.segment)*
//! - segments are non-empty and contain no whitespace
//! - a segment addresses a record field by name, or a list element when the
//!   segment is a non-negative integer
//!   Examples:
//!   "data.reading" -> fields=["data","reading"]
//!   "samples.0.v"  -> fields=["samples","0","v"]
//!
//! Reading a path that does not resolve yields `None`, which callers treat the
//! same as an explicit `Null`.

use indexmap::IndexMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValuePath {
    /// Ordered field selectors, outermost first (never empty)
    segments: Vec<String>,
}

impl ValuePath {
    /// Parse a path string according to the grammar described above.
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("empty path".to_string());
        }
        let segments: Vec<String> = s.split('.').map(|seg| seg.to_string()).collect();
        if segments.iter().any(|seg| seg.is_empty()) {
            return Err(format!("invalid value path '{s}': empty segment"));
        }
        if segments
            .iter()
            .any(|seg| seg.chars().any(char::is_whitespace))
        {
            return Err(format!("invalid value path '{s}': segment contains whitespace"));
        }
        Ok(ValuePath { segments })
    }

    /// Iterate over the path segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.as_str())
    }

    /// Resolve the path against `root`.
    pub fn get<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |current, seg| step(current, seg))
    }

    /// Return a copy of `root` with the addressed field replaced by `new`.
    /// Missing intermediate containers are created as records; a scalar in the
    /// way is replaced by a record.
    pub fn set(&self, root: &Value, new: Value) -> Value {
        let mut out = root.clone();
        set_in(&mut out, &self.segments, new);
        out
    }
}

fn step<'a>(current: &'a Value, seg: &str) -> Option<&'a Value> {
    match current {
        Value::Record(fields) => fields.get(seg),
        Value::List(items) => seg.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn set_in(target: &mut Value, segments: &[String], new: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *target = new;
        return;
    };

    if let Value::List(items) = target {
        if let Some(slot) = head.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
            set_in(slot, rest, new);
            return;
        }
    }

    if !matches!(target, Value::Record(_)) {
        *target = Value::Record(IndexMap::new());
    }
    if let Value::Record(fields) = target {
        let slot = fields.entry(head.clone()).or_insert(Value::Null);
        set_in(slot, rest, new);
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for ValuePath {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValuePath::parse(s)
    }
}

// Serde support: serialize as string, deserialize from string
impl Serialize for ValuePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ValuePath {
    fn deserialize<D>(deserializer: D) -> Result<ValuePath, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ValuePath::parse(&s).map_err(de::Error::custom)
    }
}

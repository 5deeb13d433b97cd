//! Sequence: an ordered mapping from [`Key`] to [`Value`].
//!
//! Order is significant and defines an entry's *position*. Keys are unique and
//! may be non-contiguous or non-numeric.
//!
//! JSON form:
//!   [1, 2, null]            -> keys 0, 1, 2
//!   {"a": 1, "b": null}     -> keys 'a', 'b' (document order)

use indexmap::IndexMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Key, Value};

#[derive(Clone, Debug, Default)]
pub struct Sequence {
    entries: IndexMap<Key, Value>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Build a sequence with implicit index keys `0..n`.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::from(i), v))
            .collect()
    }

    /// Insert or replace the value for `key`. A new key is appended at the
    /// end; replacing keeps the original position. Returns the old value.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Entry at 0-based `position`.
    pub fn get_index(&self, position: usize) -> Option<(&Key, &Value)> {
        self.entries.get_index(position)
    }

    pub fn position_of(&self, key: &Key) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Key, &Value)> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator {
        self.entries.keys()
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.entries.values()
    }

    /// True when keys are exactly `0..n` in order (a plain list).
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, k)| matches!(k, Key::Index(idx) if *idx == i as i64))
    }
}

// Equal only when both hold the same entries at the same positions.
impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl FromIterator<(Key, Value)> for Sequence {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Sequence {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Serialize as a JSON array when the keys form a plain list, otherwise as an
// object in key order.
impl Serialize for Sequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_list() {
            serializer.collect_seq(self.entries.values())
        } else {
            serializer.collect_map(self.entries.iter())
        }
    }
}

impl<'de> Deserialize<'de> for Sequence {
    fn deserialize<D>(deserializer: D) -> Result<Sequence, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = serde_json::Value::deserialize(deserializer).map_err(de::Error::custom)?;
        crate::json::sequence_from_json(v).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_insertion_order() {
        let mut seq = Sequence::new();
        seq.insert("b", 2);
        seq.insert("a", 1);
        seq.insert("c", Value::Null);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.get_index(0), Some((&Key::from("b"), &Value::Int(2))));
        assert_eq!(seq.position_of(&Key::from("c")), Some(2));
        assert!(!seq.is_list());
    }

    #[test]
    fn replacing_keeps_position() {
        let mut seq = Sequence::from_values([Value::Int(1), Value::Null, Value::Int(3)]);
        let old = seq.insert(1_i64, 2);
        assert_eq!(old, Some(Value::Null));
        assert_eq!(seq.get_index(1), Some((&Key::Index(1), &Value::Int(2))));
        assert!(seq.is_list());
    }

    #[test]
    fn equality_respects_order() {
        let ab: Sequence = [(Key::from("a"), Value::Int(1)), (Key::from("b"), Value::Int(2))]
            .into_iter()
            .collect();
        let ba: Sequence = [(Key::from("b"), Value::Int(2)), (Key::from("a"), Value::Int(1))]
            .into_iter()
            .collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn serializes_lists_and_maps() {
        let list = Sequence::from_values([Value::Int(1), Value::Null]);
        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,null]");

        let mut keyed = Sequence::new();
        keyed.insert("x", 1.5);
        keyed.insert("y", Value::Null);
        assert_eq!(
            serde_json::to_string(&keyed).unwrap(),
            r#"{"x":1.5,"y":null}"#
        );
    }

    #[test]
    fn deserialize_object_keeps_document_order() {
        let seq: Sequence = serde_json::from_str(r#"{"z": 1, "a": null, "m": 3}"#).unwrap();
        let keys: Vec<_> = seq.keys().cloned().collect();
        assert_eq!(keys, vec![Key::from("z"), Key::from("a"), Key::from("m")]);
    }
}

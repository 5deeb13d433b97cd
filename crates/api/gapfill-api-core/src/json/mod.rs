use serde_json::{Map, Number as JsonNumber, Value as JsonValue};
use thiserror::Error;

use crate::{Key, Sequence, Value};

/// Errors produced while converting JSON documents into sequences.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("sequence json parse error: {0}")]
    Parse(String),
    #[error("sequence json must be an array or an object, found {0}")]
    NotASequence(&'static str),
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Convert arbitrary JSON into a [`Value`]. Integers that fit `i64` become
/// `Int`, every other number becomes `Float`; strings always stay `Text`.
pub fn value_from_json(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        JsonValue::String(s) => Value::Text(s),
        JsonValue::Array(items) => Value::List(items.into_iter().map(value_from_json).collect()),
        JsonValue::Object(obj) => Value::Record(
            obj.into_iter()
                .map(|(k, v)| (k, value_from_json(v)))
                .collect(),
        ),
    }
}

/// Convert a [`Value`] back into JSON. Instants are written as RFC 3339
/// strings and non-finite floats as `null`.
pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) => JsonValue::from(*i),
        Value::Float(f) => JsonNumber::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::Instant(t) => JsonValue::String(t.to_rfc3339()),
        Value::List(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
        Value::Record(fields) => {
            let mut obj = Map::new();
            for (key, val) in fields.iter() {
                obj.insert(key.clone(), value_to_json(val));
            }
            JsonValue::Object(obj)
        }
    }
}

fn key_to_json_field(key: &Key) -> String {
    match key {
        Key::Index(i) => i.to_string(),
        Key::Name(s) => s.clone(),
        Key::Instant(t) => t.to_rfc3339(),
    }
}

/// Build a [`Sequence`] from JSON: arrays get index keys `0..n`, objects keep
/// their field names (in document order) as keys.
pub fn sequence_from_json(value: JsonValue) -> Result<Sequence, JsonError> {
    match value {
        JsonValue::Array(items) => Ok(Sequence::from_values(
            items.into_iter().map(value_from_json),
        )),
        JsonValue::Object(obj) => Ok(obj
            .into_iter()
            .map(|(k, v)| (Key::Name(k), value_from_json(v)))
            .collect()),
        other => Err(JsonError::NotASequence(json_kind(&other))),
    }
}

/// Convenience wrapper that parses a JSON string into a [`Sequence`].
pub fn sequence_from_json_str(json_str: &str) -> Result<Sequence, JsonError> {
    let root: JsonValue =
        serde_json::from_str(json_str).map_err(|e| JsonError::Parse(e.to_string()))?;
    sequence_from_json(root)
}

/// Convert a [`Sequence`] into JSON: an array when its keys are exactly
/// `0..n`, otherwise an object in key order.
pub fn sequence_to_json(sequence: &Sequence) -> JsonValue {
    if sequence.is_list() {
        return JsonValue::Array(sequence.values().map(value_to_json).collect());
    }
    let mut obj = Map::new();
    for (key, val) in sequence.iter() {
        obj.insert(key_to_json_field(key), value_to_json(val));
    }
    JsonValue::Object(obj)
}

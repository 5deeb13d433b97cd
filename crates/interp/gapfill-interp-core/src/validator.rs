//! Pre-flight checks and projections.
//!
//! Both projections walk the whole sequence and stop at the first offending
//! entry, so an error is always reported before any gap is filled.

use chrono::{DateTime, Utc};
use gapfill_api_core::coercion::{as_number, key_to_instant, value_to_instant};
use gapfill_api_core::{Key, Number, Sequence, Value, ValuePath};

use crate::InterpolationError;

static NULL: Value = Value::Null;

/// Where an entry's timestamp comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource<'a> {
    /// The entry's own key
    Key,
    /// A field inside the entry's value
    Path(&'a ValuePath),
}

impl<'a> From<Option<&'a ValuePath>> for TimeSource<'a> {
    fn from(path: Option<&'a ValuePath>) -> Self {
        path.map(TimeSource::Path).unwrap_or(TimeSource::Key)
    }
}

/// The value under interpolation for one entry. An unresolved path reads as
/// `Null`.
pub fn extract_value<'a>(value: &'a Value, path: Option<&ValuePath>) -> &'a Value {
    match path {
        Some(p) => p.get(value).unwrap_or(&NULL),
        None => value,
    }
}

/// Project every entry to `Some(number)` or `None` (absent).
pub fn project_values(
    sequence: &Sequence,
    value_path: Option<&ValuePath>,
) -> Result<Vec<Option<Number>>, InterpolationError> {
    sequence
        .iter()
        .map(|(key, value)| {
            let extracted = extract_value(value, value_path);
            match extracted {
                Value::Null => Ok(None),
                other => as_number(other).map(Some).ok_or_else(|| {
                    InterpolationError::NotNumeric {
                        key: key.clone(),
                        found: other.kind(),
                    }
                }),
            }
        })
        .collect()
}

fn entry_instant(
    key: &Key,
    value: &Value,
    source: TimeSource<'_>,
) -> Result<DateTime<Utc>, String> {
    match source {
        TimeSource::Key => key_to_instant(key),
        TimeSource::Path(path) => value_to_instant(extract_value(value, Some(path))),
    }
}

/// Resolve every entry's timestamp, present value or not: any entry may be
/// needed as a neighbour anchor.
pub fn project_timestamps(
    sequence: &Sequence,
    source: TimeSource<'_>,
) -> Result<Vec<DateTime<Utc>>, InterpolationError> {
    sequence
        .iter()
        .map(|(key, value)| {
            entry_instant(key, value, source).map_err(|reason| {
                InterpolationError::InvalidTimestamp {
                    key: key.clone(),
                    reason,
                }
            })
        })
        .collect()
}

/// Check that every present value is numeric and, when `time_source` is
/// given, that every entry carries a parseable timestamp. Values are checked
/// before timestamps.
pub fn validate(
    sequence: &Sequence,
    value_path: Option<&ValuePath>,
    time_source: Option<TimeSource<'_>>,
) -> Result<(), InterpolationError> {
    project_values(sequence, value_path)?;
    if let Some(source) = time_source {
        project_timestamps(sequence, source)?;
    }
    Ok(())
}

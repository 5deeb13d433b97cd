//! Coercion helpers from [`Value`]s and [`Key`]s into the two scalar domains
//! interpolation works with: numbers and points in time.
//!
//! Timestamp rules:
//! - Text -> RFC 3339 / ISO-8601 date-time (offset optional as `Z`, `+hh:mm`,
//!   `+hhmm` or `+hh`, `T` or space separator, seconds and fraction
//!   optional), the basic form `YYYYMMDDThhmmss`, or a bare date
//!   (`YYYY-MM-DD` / `YYYYMMDD`) at midnight
//! - Instant -> as is
//! - Int / Float -> Unix epoch seconds
//! Inputs without an offset are read as UTC. Everything is normalized to UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::{Key, Value};

// `%#z` takes `Z`, `+hh:mm`, `+hhmm` and `+hh`.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Numeric projection of a [`Value`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

/// Int/Float -> Some, everything else (including Null) -> None.
pub fn as_number(v: &Value) -> Option<Number> {
    match v {
        Value::Int(i) => Some(Number::Int(*i)),
        Value::Float(f) => Some(Number::Float(*f)),
        _ => None,
    }
}

/// Parse a date or date-time string into a UTC instant.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty timestamp".to_string());
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(t) = DateTime::<FixedOffset>::parse_from_str(s, fmt) {
            return Ok(t.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    for fmt in DATE_FORMATS {
        if let Some(naive) = NaiveDate::parse_from_str(s, fmt)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(format!("'{s}' is not a recognized date or date-time"))
}

fn from_epoch_seconds(secs: f64) -> Result<DateTime<Utc>, String> {
    if !secs.is_finite() {
        return Err(format!("{secs} is not a finite epoch timestamp"));
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return Err(format!("{secs} is out of range for an epoch timestamp"));
    }
    Utc.timestamp_opt(whole as i64, nanos)
        .single()
        .ok_or_else(|| format!("{secs} is out of range for an epoch timestamp"))
}

/// Interpret a value as a point in time.
pub fn value_to_instant(v: &Value) -> Result<DateTime<Utc>, String> {
    match v {
        Value::Text(s) => parse_instant(s),
        Value::Instant(t) => Ok(t.with_timezone(&Utc)),
        Value::Int(i) => Utc
            .timestamp_opt(*i, 0)
            .single()
            .ok_or_else(|| format!("{i} is out of range for an epoch timestamp")),
        Value::Float(f) => from_epoch_seconds(*f),
        other => Err(format!("a {} value is not a timestamp", other.kind())),
    }
}

/// Interpret a sequence key as a point in time.
pub fn key_to_instant(k: &Key) -> Result<DateTime<Utc>, String> {
    match k {
        Key::Name(s) => parse_instant(s),
        Key::Instant(t) => Ok(t.with_timezone(&Utc)),
        Key::Index(i) => Utc
            .timestamp_opt(*i, 0)
            .single()
            .ok_or_else(|| format!("{i} is out of range for an epoch timestamp")),
    }
}

/// Signed elapsed time `to - from` in microseconds.
pub fn elapsed_micros(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to.signed_duration_since(from);
    delta
        .num_microseconds()
        .map(|us| us as f64)
        .unwrap_or_else(|| delta.num_milliseconds() as f64 * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn numbers_only() {
        assert_eq!(as_number(&Value::Int(2)), Some(Number::Int(2)));
        assert_eq!(as_number(&Value::Float(2.5)), Some(Number::Float(2.5)));
        assert_eq!(as_number(&Value::Null), None);
        assert_eq!(as_number(&Value::text("3")), None);
        assert_eq!(as_number(&Value::Bool(true)), None);
    }

    #[test]
    fn parses_dates_and_datetimes() {
        assert_eq!(parse_instant("2021-01-01").unwrap(), utc("2021-01-01T00:00:00Z"));
        assert_eq!(
            parse_instant("2021-01-01T12:30:00+02:00").unwrap(),
            utc("2021-01-01T10:30:00Z")
        );
        assert_eq!(
            parse_instant("2021-01-01 12:30:00").unwrap(),
            utc("2021-01-01T12:30:00Z")
        );
        assert_eq!(
            parse_instant("2021-01-01T12:30:00.250").unwrap(),
            utc("2021-01-01T12:30:00.250Z")
        );
        assert_eq!(
            parse_instant("2021-01-01 12:30").unwrap(),
            utc("2021-01-01T12:30:00Z")
        );
    }

    #[test]
    fn parses_zone_and_precision_variants() {
        let cases = [
            ("2021-01-01T12:00:00+0200", "2021-01-01T10:00:00Z"),
            ("2021-01-01 12:00:00+0200", "2021-01-01T10:00:00Z"),
            ("2021-01-01T12:00:00+02", "2021-01-01T10:00:00Z"),
            ("2021-01-01T12:30Z", "2021-01-01T12:30:00Z"),
            ("2021-01-01T12:30+02:00", "2021-01-01T10:30:00Z"),
            ("2021-01-01T12:30+0200", "2021-01-01T10:30:00Z"),
            ("2021-01-01 12:30Z", "2021-01-01T12:30:00Z"),
            ("2021-01-01 12:30:00.5Z", "2021-01-01T12:30:00.5Z"),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_instant(input), Ok(utc(expected)), "{input}");
        }
    }

    #[test]
    fn parses_basic_format() {
        let cases = [
            ("20210101T120000Z", "2021-01-01T12:00:00Z"),
            ("20210101T120000+0200", "2021-01-01T10:00:00Z"),
            ("20210101T1230Z", "2021-01-01T12:30:00Z"),
            ("20210101T120000", "2021-01-01T12:00:00Z"),
            ("20210101", "2021-01-01T00:00:00Z"),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_instant(input), Ok(utc(expected)), "{input}");
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_instant("*").is_err());
        assert!(parse_instant("").is_err());
        assert!(parse_instant("2021-13-01").is_err());
        assert!(value_to_instant(&Value::Null).is_err());
        assert!(value_to_instant(&Value::Bool(true)).is_err());
        assert!(value_to_instant(&Value::Float(f64::NAN)).is_err());
    }

    #[test]
    fn epoch_seconds() {
        assert_eq!(value_to_instant(&Value::Int(0)).unwrap(), utc("1970-01-01T00:00:00Z"));
        assert_eq!(
            value_to_instant(&Value::Float(1.5)).unwrap(),
            utc("1970-01-01T00:00:01.5Z")
        );
        assert_eq!(key_to_instant(&Key::Index(86_400)).unwrap(), utc("1970-01-02T00:00:00Z"));
    }

    #[test]
    fn elapsed_is_signed_microseconds() {
        let a = utc("2021-01-01T00:00:00Z");
        let b = utc("2021-01-01T00:00:01.000002Z");
        assert_eq!(elapsed_micros(a, b), 1_000_002.0);
        assert_eq!(elapsed_micros(b, a), -1_000_002.0);
    }
}

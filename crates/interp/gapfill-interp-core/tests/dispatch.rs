use chrono::{DateTime, FixedOffset};
use gapfill_interp_core::{
    interpolate, interpolate_by_name, interpolate_time_aware, InterpolateExt,
    InterpolationConfig, InterpolationError, Key, Mode, Sequence, Value, ValuePath,
};

fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("rfc3339")
}

fn reading(v: Value) -> Value {
    Value::record([("data", Value::record([("reading", v)]))])
}

#[test]
fn unsupported_mode_fails_before_scanning() {
    // the sequence itself is invalid, but the mode is rejected first
    let seq = Sequence::from_values([Value::text("x")]);
    assert_eq!(
        interpolate_by_name(&seq, None, None, "nearest"),
        Err(InterpolationError::UnsupportedMode("nearest".into()))
    );
}

#[test]
fn by_name_dispatches_linear_and_time() {
    let mut seq = Sequence::new();
    seq.insert("2021-01-01", 0);
    seq.insert("2021-01-02", Value::Null);
    seq.insert("2021-01-05", 8);

    let linear = interpolate_by_name(&seq, None, None, "linear").unwrap();
    assert_eq!(linear.get(&Key::from("2021-01-02")), Some(&Value::Int(4)));

    let timed = interpolate_by_name(&seq, None, None, "time").unwrap();
    assert_eq!(timed.get(&Key::from("2021-01-02")), Some(&Value::Float(2.0)));
}

#[test]
fn native_instant_keys_are_timestamps() {
    let mut seq = Sequence::new();
    seq.insert(at("2021-01-01T00:00:00Z"), 1.0);
    seq.insert(at("2021-01-01T00:30:00+00:00"), Value::Null);
    seq.insert(at("2021-01-01T02:00:00+01:00"), 3.0);
    let out = interpolate_time_aware(&seq, None, None).unwrap();
    assert_eq!(out.get_index(1).map(|(_, v)| v), Some(&Value::Float(2.0)));
}

#[test]
fn native_instant_values_under_time_path() {
    let vpath = ValuePath::parse("v").unwrap();
    let tpath = ValuePath::parse("meta.at").unwrap();
    let entry = |t: &str, v: Value| {
        Value::record([
            ("meta", Value::record([("at", Value::Instant(at(t)))])),
            ("v", v),
        ])
    };
    let seq = Sequence::from_values([
        entry("2021-01-01T00:00:00Z", Value::Int(0)),
        entry("2021-01-01T00:00:00.000250Z", Value::Null),
        entry("2021-01-01T00:00:00.001Z", Value::Int(4)),
    ]);
    let out = interpolate(&seq, Some(&vpath), Some(&tpath), Mode::Time).unwrap();
    let filled = out.get_index(1).and_then(|(_, v)| vpath.get(v)).cloned();
    assert_eq!(filled, Some(Value::Float(1.0)));
}

#[test]
fn value_path_rewrite_leaves_rest_of_record() {
    let path = ValuePath::parse("data.reading").unwrap();
    let mut gap = reading(Value::Null);
    if let Value::Record(fields) = &mut gap {
        fields.insert("sensor".into(), Value::text("north"));
    }
    let seq = Sequence::from_values([reading(Value::Int(1)), gap, reading(Value::Int(3))]);
    let out = interpolate(&seq, Some(&path), None, Mode::Linear).unwrap();
    let mut expected = reading(Value::Int(2));
    if let Value::Record(fields) = &mut expected {
        fields.insert("sensor".into(), Value::text("north"));
    }
    assert_eq!(out.get_index(1).map(|(_, v)| v), Some(&expected));
    assert_eq!(out.get_index(0), seq.get_index(0));
}

#[test]
fn ext_trait_uses_config() {
    let seq = Sequence::from_values([
        Value::record([("timestamp", Value::text("2021-01-01")), ("value", Value::Int(1))]),
        Value::record([("timestamp", Value::text("2021-01-02")), ("value", Value::Null)]),
        Value::record([("timestamp", Value::text("2021-01-05")), ("value", Value::Int(5))]),
    ]);
    let cfg = InterpolationConfig::time()
        .with_value_path("value")
        .unwrap()
        .with_time_path("timestamp")
        .unwrap();
    let out = seq.interpolate(&cfg).unwrap();
    let value = ValuePath::parse("value").unwrap();
    assert_eq!(
        out.get_index(1).and_then(|(_, v)| value.get(v)),
        Some(&Value::Float(2.0))
    );
}

#[test]
fn empty_sequence_round_trips() {
    let seq = Sequence::new();
    assert_eq!(seq.interpolate_default().unwrap(), seq);
    assert_eq!(interpolate_time_aware(&seq, None, None).unwrap(), seq);
}

#[test]
fn all_null_sequence_is_unchanged() {
    let seq = Sequence::from_values([Value::Null, Value::Null, Value::Null]);
    assert_eq!(seq.interpolate_default().unwrap(), seq);
}

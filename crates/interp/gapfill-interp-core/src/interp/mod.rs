//! Gap filling strategies and the helpers they share.
//!
//! - linear: weight neighbours by sequence distance
//! - time_aware: weight neighbours by elapsed time

pub mod linear;
pub mod time_aware;

use gapfill_api_core::{Number, Sequence, Value, ValuePath};

/// A computed replacement for the gap at `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub position: usize,
    pub value: Number,
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Index-distance weighting of the gap at `position` between `previous` and
/// `next`: `(vp * dist_n + vn * dist_p) / (dist_p + dist_n)`.
///
/// Two integer neighbours give an integer when the division is exact and a
/// float otherwise.
pub fn index_weighted(
    vp: Number,
    previous: usize,
    vn: Number,
    next: usize,
    position: usize,
) -> Number {
    let dist_p = (position - previous) as i128;
    let dist_n = (next - position) as i128;
    let total = dist_p + dist_n;
    match (vp, vn) {
        (Number::Int(a), Number::Int(b)) => {
            let numerator = i128::from(a) * dist_n + i128::from(b) * dist_p;
            if numerator % total == 0 {
                if let Ok(exact) = i64::try_from(numerator / total) {
                    return Number::Int(exact);
                }
            }
            Number::Float(numerator as f64 / total as f64)
        }
        _ => Number::Float(
            (vp.as_f64() * dist_n as f64 + vn.as_f64() * dist_p as f64) / total as f64,
        ),
    }
}

/// Build the output sequence: same keys in the same order, untouched entries
/// cloned as is, filled entries rewritten at `value_path` (or replaced
/// outright without a path). `fills` must be ordered by position.
pub(crate) fn write_fills(
    sequence: &Sequence,
    value_path: Option<&ValuePath>,
    fills: &[Fill],
) -> Sequence {
    let mut pending = fills.iter().peekable();
    sequence
        .iter()
        .enumerate()
        .map(|(position, (key, value))| {
            let filled = pending
                .next_if(|fill| fill.position == position)
                .map(|fill| fill.value);
            let out = match (filled, value_path) {
                (None, _) => value.clone(),
                (Some(n), None) => Value::from(n),
                (Some(n), Some(path)) => path.set(value, Value::from(n)),
            };
            (key.clone(), out)
        })
        .collect()
}

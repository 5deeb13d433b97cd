//! Time-aware gap filling.
//!
//! value(i) = Vp + (Ti - Tp) * (Vn - Vp) / (Tn - Tp), elapsed times in
//! microseconds. Timestamps come from a time path or, without one, from the
//! entry key. Results are always floats.

use chrono::{DateTime, Utc};
use gapfill_api_core::coercion::elapsed_micros;
use gapfill_api_core::{Key, Number, Sequence, ValuePath};
use log::{debug, trace, warn};

use super::{index_weighted, lerp_f64, write_fills, Fill};
use crate::config::DegenerateIntervalPolicy;
use crate::gaps::detect_gaps;
use crate::validator::{project_timestamps, project_values, TimeSource};
use crate::InterpolationError;

/// Time-aware filling with the default policy, which rejects gaps whose
/// neighbours share a timestamp.
pub fn interpolate_time_aware(
    sequence: &Sequence,
    value_path: Option<&ValuePath>,
    time_path: Option<&ValuePath>,
) -> Result<Sequence, InterpolationError> {
    interpolate_time_aware_with_policy(
        sequence,
        value_path,
        time_path,
        DegenerateIntervalPolicy::default(),
    )
}

/// Fraction of the neighbour span elapsed at `ti`, clamped to `[0, 1]`.
/// `None` when the span is zero.
fn elapsed_fraction(
    tp: DateTime<Utc>,
    ti: DateTime<Utc>,
    tn: DateTime<Utc>,
    key: &Key,
) -> Option<f64> {
    let span = elapsed_micros(tp, tn);
    if span == 0.0 {
        return None;
    }
    let fraction = elapsed_micros(tp, ti) / span;
    if !(0.0..=1.0).contains(&fraction) {
        warn!(
            "time: timestamp of entry {} lies outside its neighbours' interval; clamping",
            key
        );
        return Some(fraction.clamp(0.0, 1.0));
    }
    Some(fraction)
}

pub fn interpolate_time_aware_with_policy(
    sequence: &Sequence,
    value_path: Option<&ValuePath>,
    time_path: Option<&ValuePath>,
    policy: DegenerateIntervalPolicy,
) -> Result<Sequence, InterpolationError> {
    let values = project_values(sequence, value_path)?;
    let stamps = project_timestamps(sequence, TimeSource::from(time_path))?;
    let gaps = detect_gaps(&values);

    let mut fills = Vec::new();
    for gap in &gaps {
        let Some((previous, next)) = gap.bounds() else {
            continue;
        };
        let (Some(vp), Some(vn)) = (values[previous], values[next]) else {
            continue;
        };
        let Some((key, _)) = sequence.get_index(gap.position) else {
            continue;
        };

        let (tp, ti, tn) = (stamps[previous], stamps[gap.position], stamps[next]);
        let value = match elapsed_fraction(tp, ti, tn, key) {
            Some(fraction) => Number::Float(lerp_f64(vp.as_f64(), vn.as_f64(), fraction)),
            None => match policy {
                DegenerateIntervalPolicy::Reject => {
                    return Err(InterpolationError::DegenerateInterval {
                        key: key.clone(),
                        at: tp,
                    });
                }
                DegenerateIntervalPolicy::IndexLinear => {
                    let fallback = index_weighted(vp, previous, vn, next, gap.position);
                    Number::Float(fallback.as_f64())
                }
            },
        };
        trace!(
            "time: entry {} between {} and {} -> {:?}",
            key,
            tp,
            tn,
            value
        );
        fills.push(Fill {
            position: gap.position,
            value,
        });
    }

    debug!(
        "time: {} entries, {} gaps, {} fillable",
        sequence.len(),
        gaps.len(),
        fills.len()
    );

    if fills.is_empty() {
        return Ok(sequence.clone());
    }
    Ok(write_fills(sequence, value_path, &fills))
}

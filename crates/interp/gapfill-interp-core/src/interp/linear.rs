//! Index-linear gap filling.

use gapfill_api_core::{Sequence, ValuePath};
use log::{debug, trace};

use super::{index_weighted, write_fills, Fill};
use crate::gaps::detect_gaps;
use crate::validator::project_values;
use crate::InterpolationError;

/// Fill every bounded gap with the position-weighted average of its nearest
/// present neighbours. Leading and trailing gaps stay absent. Returns an
/// identical sequence when nothing is fillable.
pub fn interpolate_linear(
    sequence: &Sequence,
    value_path: Option<&ValuePath>,
) -> Result<Sequence, InterpolationError> {
    let values = project_values(sequence, value_path)?;
    let gaps = detect_gaps(&values);

    let fills: Vec<Fill> = gaps
        .iter()
        .filter_map(|gap| {
            let (previous, next) = gap.bounds()?;
            let value = index_weighted(
                values[previous]?,
                previous,
                values[next]?,
                next,
                gap.position,
            );
            trace!(
                "linear: position {} between {} and {} -> {:?}",
                gap.position,
                previous,
                next,
                value
            );
            Some(Fill {
                position: gap.position,
                value,
            })
        })
        .collect();

    debug!(
        "linear: {} entries, {} gaps, {} fillable",
        sequence.len(),
        gaps.len(),
        fills.len()
    );

    if fills.is_empty() {
        return Ok(sequence.clone());
    }
    Ok(write_fills(sequence, value_path, &fills))
}

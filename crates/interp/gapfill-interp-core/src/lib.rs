//! gapfill-interp-core
//!
//! Fills absent entries of an ordered key/value [`Sequence`] from their nearest
//! present neighbours, weighting either by position ([`Mode::Linear`]) or by
//! elapsed time ([`Mode::Time`]).
//!
//! Every call validates the whole sequence first, detects gaps, then builds a
//! new sequence with the same keys in the same order. Only bounded gaps are
//! filled; leading and trailing runs stay absent.

pub mod config;
pub mod error;
pub mod ext;
pub mod gaps;
pub mod interp;
pub mod mode;
pub mod validator;

use log::warn;

pub use gapfill_api_core::{Key, Number, Sequence, Value, ValueKind, ValuePath};

pub use config::{DegenerateIntervalPolicy, InterpolationConfig};
pub use error::InterpolationError;
pub use ext::InterpolateExt;
pub use gaps::{detect_gaps, Gap};
pub use interp::linear::interpolate_linear;
pub use interp::time_aware::{interpolate_time_aware, interpolate_time_aware_with_policy};
pub use mode::Mode;
pub use validator::{validate, TimeSource};

/// Dispatch on `mode`. `time_path` only applies to [`Mode::Time`].
pub fn interpolate(
    sequence: &Sequence,
    value_path: Option<&ValuePath>,
    time_path: Option<&ValuePath>,
    mode: Mode,
) -> Result<Sequence, InterpolationError> {
    interpolate_with_policy(
        sequence,
        value_path,
        time_path,
        mode,
        DegenerateIntervalPolicy::default(),
    )
}

/// [`interpolate`] with an explicit policy for neighbours sharing a timestamp.
pub fn interpolate_with_policy(
    sequence: &Sequence,
    value_path: Option<&ValuePath>,
    time_path: Option<&ValuePath>,
    mode: Mode,
    policy: DegenerateIntervalPolicy,
) -> Result<Sequence, InterpolationError> {
    match mode {
        Mode::Linear => {
            if let Some(path) = time_path {
                warn!("linear: ignoring time path '{}'", path);
            }
            interpolate_linear(sequence, value_path)
        }
        Mode::Time => interpolate_time_aware_with_policy(sequence, value_path, time_path, policy),
    }
}

/// Parse `mode` before touching the sequence, then dispatch.
pub fn interpolate_by_name(
    sequence: &Sequence,
    value_path: Option<&ValuePath>,
    time_path: Option<&ValuePath>,
    mode: &str,
) -> Result<Sequence, InterpolationError> {
    let mode: Mode = mode.parse()?;
    interpolate(sequence, value_path, time_path, mode)
}

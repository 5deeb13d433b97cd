//! Method-style entry points on [`Sequence`].

use gapfill_api_core::Sequence;

use crate::{interpolate_linear, InterpolationConfig, InterpolationError};

pub trait InterpolateExt {
    /// Interpolate according to `config`.
    fn interpolate(&self, config: &InterpolationConfig) -> Result<Sequence, InterpolationError>;

    /// Linear interpolation of bare values.
    fn interpolate_default(&self) -> Result<Sequence, InterpolationError>;
}

impl InterpolateExt for Sequence {
    fn interpolate(&self, config: &InterpolationConfig) -> Result<Sequence, InterpolationError> {
        config.apply(self)
    }

    fn interpolate_default(&self) -> Result<Sequence, InterpolationError> {
        interpolate_linear(self, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapfill_api_core::Value;

    #[test]
    fn default_is_linear() {
        let seq = Sequence::from_values([1.into(), 2.into(), Value::Null, 4.into(), 5.into()]);
        let out = seq.interpolate_default().unwrap();
        assert_eq!(out.get_index(2).map(|(_, v)| v), Some(&Value::Int(3)));
    }
}

//! Interpolation configuration.

use gapfill_api_core::{Sequence, ValuePath};
use serde::{Deserialize, Serialize};

use crate::{interpolate_with_policy, InterpolationError, Mode};

/// What to do when a gap's two neighbours share a timestamp in time mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateIntervalPolicy {
    /// Fail the call with `DegenerateInterval`.
    #[default]
    Reject,
    /// Weight that gap by sequence position instead.
    IndexLinear,
}

/// Options for one interpolation call. Every field has a default, so `{}`
/// is a valid JSON config (linear, no paths).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolationConfig {
    pub mode: Mode,
    /// Nested field holding the value; the entry itself when unset.
    pub value_path: Option<ValuePath>,
    /// Nested field holding the timestamp; the entry key when unset.
    /// Ignored in linear mode.
    pub time_path: Option<ValuePath>,
    pub degenerate_interval: DegenerateIntervalPolicy,
}

fn parse_path(s: &str) -> Result<ValuePath, InterpolationError> {
    ValuePath::parse(s).map_err(InterpolationError::InvalidPath)
}

impl InterpolationConfig {
    pub fn linear() -> Self {
        Self::default()
    }

    pub fn time() -> Self {
        Self {
            mode: Mode::Time,
            ..Self::default()
        }
    }

    pub fn with_value_path(mut self, path: &str) -> Result<Self, InterpolationError> {
        self.value_path = Some(parse_path(path)?);
        Ok(self)
    }

    pub fn with_time_path(mut self, path: &str) -> Result<Self, InterpolationError> {
        self.time_path = Some(parse_path(path)?);
        Ok(self)
    }

    pub fn with_degenerate_interval(mut self, policy: DegenerateIntervalPolicy) -> Self {
        self.degenerate_interval = policy;
        self
    }

    /// Parse a JSON config. An unknown `mode` is reported as
    /// `UnsupportedMode`, bad paths as `InvalidPath`.
    pub fn from_json_str(json_str: &str) -> Result<Self, InterpolationError> {
        let root: serde_json::Value = serde_json::from_str(json_str)
            .map_err(|e| InterpolationError::InvalidConfig(e.to_string()))?;

        if let Some(mode) = root.get("mode").and_then(|m| m.as_str()) {
            mode.parse::<Mode>()?;
        }
        for field in ["value_path", "time_path"] {
            if let Some(path) = root.get(field).and_then(|p| p.as_str()) {
                parse_path(path)?;
            }
        }

        serde_json::from_value(root).map_err(|e| InterpolationError::InvalidConfig(e.to_string()))
    }

    /// Run the configured interpolation over `sequence`.
    pub fn apply(&self, sequence: &Sequence) -> Result<Sequence, InterpolationError> {
        interpolate_with_policy(
            sequence,
            self.value_path.as_ref(),
            self.time_path.as_ref(),
            self.mode,
            self.degenerate_interval,
        )
    }
}

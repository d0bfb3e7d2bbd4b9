//! Agent configuration.

use crate::{CoreError, CoreResult, SceneBounds};

/// Tunables for one agent.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the agent builder.  Every field has a default, so a partial file is fine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// A customer closer than this (planar distance, strict `<`) is greeted.
    pub proximity_threshold: f64,

    /// Floor area the agent may walk in.  Applied to `x` and `z`.
    pub bounds: SceneBounds,

    /// Response-sampling seed.  `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: 3.0,
            bounds:              SceneBounds::default(),
            seed:                None,
        }
    }
}

impl AgentConfig {
    /// Reject values the controller cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.proximity_threshold.is_finite() || self.proximity_threshold <= 0.0 {
            return Err(CoreError::Config(format!(
                "proximity_threshold must be a positive finite number, got {}",
                self.proximity_threshold
            )));
        }
        let SceneBounds { min, max } = self.bounds;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(CoreError::Config(format!(
                "bounds must satisfy min <= max with finite values, got [{min}, {max}]"
            )));
        }
        Ok(())
    }
}

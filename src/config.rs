//! Numerical configuration for homology computations.

use serde::Deserialize;

use crate::{Result, TopologyError};

/// Tolerances and iteration budget for the SVD-based rank engine.
///
/// Loaded from JSON when the embedding application wants to override the
/// defaults; every field falls back to its default when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HomologyConfig {
    /// Singular values at or below this are treated as zero
    pub tolerance: f64,

    /// Maximum number of implicit-shift sweeps the SVD may take
    /// before reporting a numerical failure (0 means unbounded)
    pub max_svd_iterations: usize,
}

impl Default for HomologyConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_svd_iterations: 10_000,
        }
    }
}

impl HomologyConfig {
    /// Default configuration with a custom tolerance
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TopologyError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tolerances that would make every matrix rank-deficient or full-rank
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(TopologyError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

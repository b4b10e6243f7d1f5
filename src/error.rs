//! Error types shared by the topology, algebra and game modules.

use thiserror::Error;

/// Failures raised while deriving complexes or computing homology
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    /// Input cells violate a structural precondition
    /// (short or self-intersecting cycle, edge set that is not one simple cycle).
    #[error("invalid complex: {0}")]
    InvalidComplex(String),

    /// The singular value decomposition or least-squares solve did not succeed.
    #[error("numerical failure: {0}")]
    NumericalFailure(String),

    /// A move referred to a cell the board does not have.
    #[error("board has no cell {0}")]
    UnknownCell(usize),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TopologyError {
    pub(crate) fn invalid_complex(msg: impl Into<String>) -> Self {
        Self::InvalidComplex(msg.into())
    }

    pub(crate) fn numerical(msg: impl Into<String>) -> Self {
        Self::NumericalFailure(msg.into())
    }

    /// True for errors the game should survive by keeping stale Betti numbers
    pub fn is_numerical(&self) -> bool {
        matches!(self, Self::NumericalFailure(_))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TopologyError>;

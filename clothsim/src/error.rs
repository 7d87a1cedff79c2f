//! Error types for cloth setup and configuration.
//!
//! The substep itself never fails: degenerate geometry (coincident particles,
//! a particle sitting exactly on the collider center) is skipped instead.

use thiserror::Error;

/// Errors raised while building topology, state or a scenario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClothError {
    /// Grid side must hold at least 2 particles so one quad exists.
    #[error("grid size must be at least 2, got {n}")]
    InvalidGridSize { n: usize },

    #[error("quad size must be positive and finite, got {0}")]
    InvalidQuadSize(f64),

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    /// An engine count (substeps, report interval) was zero.
    #[error("`{field}` must be at least 1")]
    ZeroCount { field: &'static str },

    #[error("collider radius must be non-negative and finite, got {0}")]
    InvalidRadius(f64),

    /// A config vector (gravity, center, axis) did not have 3 components.
    #[error("`{field}` must have 3 components, got {len}")]
    InvalidVector { field: &'static str, len: usize },

    /// Position/velocity arrays do not match the grid size.
    #[error("state holds {found} particles, expected {expected}")]
    StateSizeMismatch { expected: usize, found: usize },
}

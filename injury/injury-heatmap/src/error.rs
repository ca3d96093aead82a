//! Error types for heatmap aggregation.

use injury_canonical::CanonicalError;
use injury_types::MeshError;
use thiserror::Error;

/// Result type for heatmap operations.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Errors that can occur while building a heatmap.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum HeatmapError {
    /// The proximity threshold was zero, negative or not finite.
    #[error("invalid proximity threshold {value} (must be a finite value > 0)")]
    InvalidThreshold {
        /// The rejected threshold.
        value: f64,
    },

    /// The mesh is structurally invalid.
    #[error("invalid mesh: {0}")]
    Mesh(#[from] MeshError),

    /// The mesh's bounding box cannot anchor canonical coordinates.
    #[error("cannot project markers: {0}")]
    Canonical(#[from] CanonicalError),
}

//! Error types for canonical coordinate conversion.

use injury_types::Axis;
use thiserror::Error;

/// Result type for canonical coordinate conversion.
pub type CanonicalResult<T> = Result<T, CanonicalError>;

/// Errors that can occur while normalizing a world point.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum CanonicalError {
    /// The bounding box has no positive extent on an axis, so that axis cannot be rescaled.
    ///
    /// Happens for flat meshes and for a box computed before any mesh was loaded.
    #[error("bounding box is degenerate on the {axis} axis (extent {extent})")]
    DegenerateBounds {
        /// The offending axis.
        axis: Axis,
        /// Its extent (`max - min`).
        extent: f64,
    },
}

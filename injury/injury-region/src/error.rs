//! Error types for injury region operations.

use thiserror::Error;

/// Result type for region operations.
pub type RegionResult<T> = Result<T, RegionError>;

/// Errors that can occur while building or editing injury regions and cases.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum RegionError {
    /// A polygon was finalized before it had enough vertices to enclose an area.
    #[error("polygon needs at least {required} vertices, has {actual}")]
    TooFewVertices {
        /// Minimum vertex count.
        required: usize,
        /// Vertices present.
        actual: usize,
    },

    /// A radius was negative or not a number.
    #[error("invalid radius {radius} (must be a finite value >= 0)")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// A polygon vertex index was out of range.
    #[error("vertex index {index} out of range (polygon has {len} vertices)")]
    VertexIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of vertices in the polygon.
        len: usize,
    },

    /// An injury index was out of range for a case.
    #[error("injury index {index} out of range (case has {len} injuries)")]
    InjuryIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of injuries in the case.
        len: usize,
    },

    /// No case with this id is stored.
    #[error("case '{case_id}' not found")]
    CaseNotFound {
        /// The missing case id.
        case_id: String,
    },

    /// A case with this id is already stored.
    #[error("case '{case_id}' already exists")]
    DuplicateCase {
        /// The duplicate case id.
        case_id: String,
    },
}

//! Error types for marking sessions.

use injury_canonical::CanonicalError;
use injury_region::RegionError;
use injury_types::MeshError;
use thiserror::Error;

/// Result type for marking operations.
pub type MarkingResult<T> = Result<T, MarkingError>;

/// Errors returned by a marking session. The session state is unchanged
/// whenever one is returned.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum MarkingError {
    /// Commit was requested with no marker placed and no outline drawn.
    #[error("nothing to commit")]
    NothingToCommit,

    /// The pick ray missed the mesh.
    #[error("click did not hit the mesh")]
    NoIntersection,

    /// The picked point could not be normalized.
    #[error(transparent)]
    Canonical(#[from] CanonicalError),

    /// The region or case rejected the edit.
    #[error(transparent)]
    Region(#[from] RegionError),

    /// The mesh could not be picked against.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

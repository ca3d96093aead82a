//! Error types for body mesh operations.

use thiserror::Error;

/// Result type for body mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors raised by a structurally invalid body mesh.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum MeshError {
    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index} (mesh has {vertex_count} vertices)")]
    FaceIndexOutOfRange {
        /// The offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// The world transform cannot be inverted, so world points have no local position.
    #[error("world transform is not invertible")]
    NonInvertibleTransform,
}

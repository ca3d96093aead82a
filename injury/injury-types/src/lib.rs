//! Geometry foundation for injury mapping.
//!
//! This crate provides the types every other `injury-*` crate builds on:
//!
//! - [`BoundingBox`] - Axis-aligned box of a loaded mesh in world space
//! - [`Transform3D`] - World transform of a mesh instance (scale, rotation, translation)
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`VertexColor`] - 8-bit RGB color written into heatmap buffers
//! - [`BodyMesh`] - A loaded body mesh: local-space triangles plus a world transform
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64` in whatever
//! units the loaded model uses.
//!
//! # Example
//!
//! ```
//! use injury_types::{BodyMesh, Point3, Transform3D};
//!
//! let mesh = BodyMesh::new(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 2.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! )
//! .with_world_transform(Transform3D::uniform_scale(5.0));
//!
//! let bounds = mesh.world_bounds();
//! assert!((bounds.max.y - 10.0).abs() < 1e-10);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod bounds;
mod color;
mod error;
mod mesh;
mod transform;
mod triangle;

pub use bounds::{Axis, BoundingBox};
pub use color::VertexColor;
pub use error::{MeshError, MeshResult};
pub use mesh::BodyMesh;
pub use transform::Transform3D;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

//! The loaded body mesh.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BoundingBox, MeshError, MeshResult, Transform3D, Triangle};

/// A body mesh instance as loaded into a scene.
///
/// Geometry lives in local space as an indexed triangle list. The world
/// transform places that geometry in the scene; canonical injury coordinates
/// are always taken relative to the world-space bounding box, so the same
/// stored injury lands on the same anatomical spot however the model is
/// scaled or moved.
///
/// # Example
///
/// ```
/// use injury_types::{BodyMesh, Point3, Transform3D};
///
/// let mesh = BodyMesh::new(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 1.0),
///     ],
///     vec![[0, 1, 2]],
/// )
/// .with_world_transform(Transform3D::translation(10.0, 0.0, 0.0));
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.world_bounds().min, Point3::new(10.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyMesh {
    /// Vertex positions in local space.
    pub positions: Vec<Point3<f64>>,

    /// Triangles as indices into `positions`.
    pub faces: Vec<[u32; 3]>,

    /// Local-to-world transform.
    pub world: Transform3D,
}

impl BodyMesh {
    /// Create a mesh in local space with an identity world transform.
    #[must_use]
    pub fn new(positions: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self {
            positions,
            faces,
            world: Transform3D::identity(),
        }
    }

    /// Set the world transform.
    #[must_use]
    pub fn with_world_transform(mut self, world: Transform3D) -> Self {
        self.world = world;
        self
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// World-space bounding box of all vertices after the world transform.
    ///
    /// Empty when the mesh has no vertices.
    #[must_use]
    pub fn world_bounds(&self) -> BoundingBox {
        let mut bounds = BoundingBox::empty();
        for position in &self.positions {
            bounds.expand_to_include(&self.world.transform_point(position));
        }
        bounds
    }

    /// Check that every face references an existing vertex.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::FaceIndexOutOfRange`] for the first bad index.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.positions.len();
        for (face, indices) in self.faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::FaceIndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// All triangles in local space, in face order.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::FaceIndexOutOfRange`] if a face is malformed.
    pub fn local_triangles(&self) -> MeshResult<Vec<Triangle>> {
        self.validate()?;
        Ok(self
            .faces
            .iter()
            .map(|&[a, b, c]| {
                Triangle::new(
                    self.positions[a as usize],
                    self.positions[b as usize],
                    self.positions[c as usize],
                )
            })
            .collect())
    }

    /// The world-to-local transform.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::NonInvertibleTransform`] if the world transform is singular.
    pub fn world_to_local(&self) -> MeshResult<Transform3D> {
        self.world.inverse().ok_or(MeshError::NonInvertibleTransform)
    }

    /// A copy where every face owns its three vertices.
    ///
    /// Per-triangle colors written into an indexed mesh collide on shared
    /// vertices; after this conversion each triangle keeps its own color.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::FaceIndexOutOfRange`] if a face is malformed.
    #[allow(clippy::cast_possible_truncation)]
    // Face counts past u32::MAX / 3 are not representable in an indexed mesh anyway.
    pub fn unindexed(&self) -> MeshResult<Self> {
        let triangles = self.local_triangles()?;
        let mut positions = Vec::with_capacity(triangles.len() * 3);
        let mut faces = Vec::with_capacity(triangles.len());
        for tri in triangles {
            let base = positions.len() as u32;
            positions.extend([tri.v0, tri.v1, tri.v2]);
            faces.push([base, base + 1, base + 2]);
        }
        Ok(Self {
            positions,
            faces,
            world: self.world,
        })
    }
}

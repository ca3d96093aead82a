//! Ray picking against a body mesh.

use injury_types::{BodyMesh, MeshResult, Point3, Triangle, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const PARALLEL_EPSILON: f64 = 1e-12;

/// A world-space pick ray, typically from the camera through the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Ray origin.
    pub origin: Point3<f64>,
    /// Ray direction (need not be normalized).
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Create a ray.
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

/// Closest point where `ray` hits `mesh`, in world space.
///
/// Both faces of every triangle are hit-tested. Returns `Ok(None)` on a miss.
///
/// # Errors
///
/// Returns [`injury_types::MeshError::FaceIndexOutOfRange`] for a malformed mesh.
///
/// # Example
///
/// ```
/// use injury_marking::{pick, Ray};
/// use injury_types::{BodyMesh, Point3, Vector3};
///
/// let mesh = BodyMesh::new(
///     vec![Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, -1.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
///     vec![[0, 1, 2]],
/// );
/// let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), -Vector3::z());
/// assert_eq!(pick(&mesh, &ray).unwrap(), Some(Point3::origin()));
/// ```
pub fn pick(mesh: &BodyMesh, ray: &Ray) -> MeshResult<Option<Point3<f64>>> {
    let closest = mesh
        .local_triangles()?
        .iter()
        .map(|tri| {
            Triangle::new(
                mesh.world.transform_point(&tri.v0),
                mesh.world.transform_point(&tri.v1),
                mesh.world.transform_point(&tri.v2),
            )
        })
        .filter_map(|tri| ray_triangle_intersect(ray, &tri))
        .min_by(f64::total_cmp);
    Ok(closest.map(|t| ray.at(t)))
}

/// Möller-Trumbore; returns the ray parameter of the hit.
fn ray_triangle_intersect(ray: &Ray, tri: &Triangle) -> Option<f64> {
    let edge1 = tri.v1 - tri.v0;
    let edge2 = tri.v2 - tri.v0;

    let h = ray.direction.cross(&edge2);
    let a = edge1.dot(&h);

    // Ray is parallel to triangle
    if a.abs() < PARALLEL_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - tri.v0;
    let u = f * s.dot(&h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * ray.direction.dot(&q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(&q);
    (t >= 0.0).then_some(t)
}

//! World transform of a loaded mesh instance.

use nalgebra::{Matrix4, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D affine transformation stored as a 4x4 matrix.
///
/// Maps a mesh's local coordinates into world space. The body model is
/// typically loaded with a uniform scale and placed at some offset, but any
/// invertible affine matrix is accepted.
///
/// # Example
///
/// ```
/// use injury_types::{Point3, Transform3D};
///
/// let world = Transform3D::uniform_scale(5.0).then(&Transform3D::translation(0.0, 1.0, 0.0));
/// let p = world.transform_point(&Point3::new(1.0, 1.0, 1.0));
/// assert_eq!(p, Point3::new(5.0, 6.0, 5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform3D {
    matrix: Matrix4<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Wrap an existing homogeneous matrix.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(tx, ty, tz)`.
    #[must_use]
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(tx, ty, tz)),
        }
    }

    /// Uniform scale around the origin.
    #[must_use]
    pub fn uniform_scale(factor: f64) -> Self {
        Self::scale(factor, factor, factor)
    }

    /// Per-axis scale around the origin.
    #[must_use]
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)),
        }
    }

    /// Rotation around the X axis, `angle` in radians.
    #[must_use]
    pub fn rotation_x(angle: f64) -> Self {
        Self {
            matrix: Matrix4::from_axis_angle(&Vector3::x_axis(), angle),
        }
    }

    /// Rotation around the Y axis, `angle` in radians.
    #[must_use]
    pub fn rotation_y(angle: f64) -> Self {
        Self {
            matrix: Matrix4::from_axis_angle(&Vector3::y_axis(), angle),
        }
    }

    /// Rotation around the Z axis, `angle` in radians.
    #[must_use]
    pub fn rotation_z(angle: f64) -> Self {
        Self {
            matrix: Matrix4::from_axis_angle(&Vector3::z_axis(), angle),
        }
    }

    /// Compose: the result applies `self` first, then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Inverse transform, or `None` when the matrix is singular (e.g. a zero scale).
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(Self::from_matrix)
    }

    /// Transform a point (translation applies).
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.matrix.transform_point(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn default_is_identity() {
        let p = Point3::new(5.0, 10.0, 15.0);
        assert_relative_eq!(Transform3D::default().transform_point(&p), p);
    }

    #[test]
    fn translation_then_scale() {
        let t = Transform3D::translation(1.0, 0.0, 0.0).then(&Transform3D::uniform_scale(2.0));
        let result = t.transform_point(&Point3::origin());
        assert_relative_eq!(result, Point3::new(2.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn rotations_follow_right_hand_rule() {
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(
            Transform3D::rotation_z(FRAC_PI_2).transform_point(&x),
            Point3::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Transform3D::rotation_x(FRAC_PI_2).transform_point(&y),
            Point3::new(0.0, 0.0, 1.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Transform3D::rotation_y(FRAC_PI_2).transform_point(&x),
            Point3::new(0.0, 0.0, -1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn inverse_undoes_transform() {
        let t = Transform3D::scale(5.0, 2.0, 1.0)
            .then(&Transform3D::rotation_y(0.3))
            .then(&Transform3D::translation(10.0, -4.0, 2.0));
        let inv = t.inverse().unwrap_or_default();
        let p = Point3::new(0.25, -1.5, 3.0);
        assert_relative_eq!(inv.transform_point(&t.transform_point(&p)), p, epsilon = 1e-10);
    }

    #[test]
    fn zero_scale_is_not_invertible() {
        assert!(Transform3D::uniform_scale(0.0).inverse().is_none());
    }
}

//! Axis-aligned bounding box of a loaded mesh.

use std::fmt;

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of this axis (`0`, `1` or `2`).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// An axis-aligned bounding box.
///
/// Computed once from a loaded mesh's current world transform and treated as
/// read-only afterwards. A box with a zero-length axis is *degenerate*; the
/// canonical normalizer refuses to divide by such an axis.
///
/// # Example
///
/// ```
/// use injury_types::{BoundingBox, Point3};
///
/// let bounds = BoundingBox::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 10.0, 10.0),
/// );
///
/// assert!(bounds.contains(&Point3::new(5.0, 5.0, 5.0)));
/// assert!(bounds.degenerate_axis().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Create a box from two corners, sorting each axis so that `min <= max`.
    #[must_use]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// An empty box (`min > max`), the identity for [`expand_to_include`](Self::expand_to_include).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box enclosing every point. Empty if the iterator is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use injury_types::{BoundingBox, Point3};
    ///
    /// let points = [Point3::new(1.0, -2.0, 0.0), Point3::new(-1.0, 4.0, 3.0)];
    /// let bounds = BoundingBox::from_points(points.iter());
    /// assert_eq!(bounds.min, Point3::new(-1.0, -2.0, 0.0));
    /// assert_eq!(bounds.max, Point3::new(1.0, 4.0, 3.0));
    /// ```
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut bounds = Self::empty();
        for point in points {
            bounds.expand_to_include(point);
        }
        bounds
    }

    /// `true` when no point has been included yet (`min > max` on some axis).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Per-axis extent (`max - min`).
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Extent along a single axis.
    #[inline]
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f64 {
        self.max[axis.index()] - self.min[axis.index()]
    }

    /// Center of the box.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// First axis whose extent is not a positive finite number, with that extent.
    ///
    /// Flat meshes have a zero extent, an empty box has a negative one.
    #[must_use]
    pub fn degenerate_axis(&self) -> Option<(Axis, f64)> {
        Axis::ALL
            .into_iter()
            .map(|axis| (axis, self.extent(axis)))
            .find(|&(_, extent)| !(extent > 0.0 && extent.is_finite()))
    }

    /// Whether the point lies inside the box. The boundary counts as inside.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            let i = axis.index();
            point[i] >= self.min[i] && point[i] <= self.max[i]
        })
    }

    /// Grow the box to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

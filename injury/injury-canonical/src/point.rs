//! The canonical point type.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of decimal digits kept by every [`CanonicalPoint`].
pub const CANONICAL_DECIMALS: i32 = 4;

const SCALE: f64 = 10_000.0;

/// A location relative to a mesh's bounding box, each axis in `[-1, 1]` for
/// points inside the box.
///
/// Components are rounded to [`CANONICAL_DECIMALS`] digits on construction,
/// which keeps stored injuries compact and makes equal clicks compare equal.
///
/// # Example
///
/// ```
/// use injury_canonical::CanonicalPoint;
///
/// let p = CanonicalPoint::new(0.123_456, -0.5, 1.0);
/// assert_eq!(p.x(), 0.1235);
/// assert_eq!(p.y(), -0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Coords"))]
pub struct CanonicalPoint {
    x: f64,
    y: f64,
    z: f64,
}

impl CanonicalPoint {
    /// Create a canonical point, rounding each component.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: round(x),
            y: round(y),
            z: round(z),
        }
    }

    /// The canonical origin, the center of the bounding box.
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a canonical point from an unrounded point.
    #[must_use]
    pub fn from_point(point: &Point3<f64>) -> Self {
        Self::new(point.x, point.y, point.z)
    }

    /// X component.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y component.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Z component.
    #[inline]
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Components as an nalgebra point.
    #[inline]
    #[must_use]
    pub fn to_point(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Mean of a set of canonical points, rounded like any other canonical point.
    ///
    /// Returns `None` for an empty slice.
    ///
    /// # Example
    ///
    /// ```
    /// use injury_canonical::CanonicalPoint;
    ///
    /// let points = [CanonicalPoint::new(0.0, 0.0, 0.0), CanonicalPoint::new(0.5, -0.5, 1.0)];
    /// assert_eq!(CanonicalPoint::mean(&points), Some(CanonicalPoint::new(0.25, -0.25, 0.5)));
    /// assert_eq!(CanonicalPoint::mean(&[]), None);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(points: &[Self]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let sum = points
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.to_point().coords);
        Some(Self::from_point(&Point3::from(sum / n)))
    }
}

impl From<CanonicalPoint> for Point3<f64> {
    fn from(point: CanonicalPoint) -> Self {
        point.to_point()
    }
}

fn round(value: f64) -> f64 {
    (value * SCALE).round() / SCALE
}

/// Wire shape of a canonical point; rounding is reapplied on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct Coords {
    x: f64,
    y: f64,
    z: f64,
}

#[cfg(feature = "serde")]
impl From<Coords> for CanonicalPoint {
    fn from(c: Coords) -> Self {
        Self::new(c.x, c.y, c.z)
    }
}

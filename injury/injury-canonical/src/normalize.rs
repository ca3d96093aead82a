//! World space to canonical space and back.

use injury_types::{BoundingBox, Point3};

use crate::error::{CanonicalError, CanonicalResult};
use crate::point::CanonicalPoint;

/// Map a world-space point into canonical space relative to `bounds`.
///
/// Per axis: `c = (p - min) / (max - min) * 2 - 1`, rounded to four decimals.
/// Points outside the box yield components outside `[-1, 1]`.
///
/// # Errors
///
/// Returns [`CanonicalError::DegenerateBounds`] if any axis of `bounds` has
/// no positive extent.
///
/// # Example
///
/// ```
/// use injury_canonical::normalize;
/// use injury_types::{BoundingBox, Point3};
///
/// let bounds = BoundingBox::new(Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 4.0, 2.0));
/// let c = normalize(&Point3::new(1.0, 1.0, 0.0), &bounds).unwrap();
/// assert_eq!((c.x(), c.y(), c.z()), (1.0, -0.5, -1.0));
/// ```
pub fn normalize(world: &Point3<f64>, bounds: &BoundingBox) -> CanonicalResult<CanonicalPoint> {
    if let Some((axis, extent)) = bounds.degenerate_axis() {
        return Err(CanonicalError::DegenerateBounds { axis, extent });
    }

    let size = bounds.size();
    let scaled = (world - bounds.min).component_div(&size) * 2.0;
    Ok(CanonicalPoint::new(
        scaled.x - 1.0,
        scaled.y - 1.0,
        scaled.z - 1.0,
    ))
}

/// Map a canonical point back into world space for `bounds`.
///
/// Per axis: `p = (c + 1) / 2 * (max - min) + min`, without rounding. A
/// degenerate axis collapses onto `min`.
#[must_use]
pub fn denormalize(point: &CanonicalPoint, bounds: &BoundingBox) -> Point3<f64> {
    let size = bounds.size();
    let unit = point.to_point().coords.add_scalar(1.0) / 2.0;
    bounds.min + unit.component_mul(&size)
}

//! Radius injury regions.

use injury_canonical::CanonicalPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RegionError, RegionResult};
use crate::metadata::InjuryMetadata;

/// A circular injury: a canonical center plus a radius.
///
/// A radius of `0` marks a point injury. The radius is kept in the operator's
/// unit and is never scaled with the body model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadiusRegion {
    center: CanonicalPoint,
    radius: f64,
    metadata: InjuryMetadata,
}

impl RadiusRegion {
    /// Create a radius region.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidRadius`] if `radius` is negative or not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use injury_region::{CanonicalPoint, InjuryMetadata, RadiusRegion};
    ///
    /// let r = RadiusRegion::new(CanonicalPoint::ORIGIN, 2.5, InjuryMetadata::new("bruise")).unwrap();
    /// assert_eq!(r.radius(), 2.5);
    /// assert!(RadiusRegion::new(CanonicalPoint::ORIGIN, -1.0, InjuryMetadata::default()).is_err());
    /// ```
    pub fn new(center: CanonicalPoint, radius: f64, metadata: InjuryMetadata) -> RegionResult<Self> {
        check_radius(radius)?;
        Ok(Self {
            center,
            radius,
            metadata,
        })
    }

    /// A point injury (radius `0`).
    #[must_use]
    pub const fn point(center: CanonicalPoint, metadata: InjuryMetadata) -> Self {
        Self {
            center,
            radius: 0.0,
            metadata,
        }
    }

    /// Center in canonical space.
    #[must_use]
    pub const fn center(&self) -> CanonicalPoint {
        self.center
    }

    /// Radius in the operator's unit.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Attached metadata.
    #[must_use]
    pub const fn metadata(&self) -> &InjuryMetadata {
        &self.metadata
    }

    /// Copy with a different center.
    #[must_use]
    pub fn with_center(&self, center: CanonicalPoint) -> Self {
        Self {
            center,
            ..self.clone()
        }
    }

    /// Copy with a different radius.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidRadius`] if `radius` is negative or not finite.
    pub fn with_radius(&self, radius: f64) -> RegionResult<Self> {
        check_radius(radius)?;
        Ok(Self {
            radius,
            ..self.clone()
        })
    }

    /// Copy with different metadata.
    #[must_use]
    pub fn with_metadata(&self, metadata: InjuryMetadata) -> Self {
        Self {
            metadata,
            ..self.clone()
        }
    }
}

fn check_radius(radius: f64) -> RegionResult<()> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(RegionError::InvalidRadius { radius })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_radius_is_a_point_injury() {
        let a = RadiusRegion::new(CanonicalPoint::ORIGIN, 0.0, InjuryMetadata::new("cut")).unwrap();
        let b = RadiusRegion::point(CanonicalPoint::ORIGIN, InjuryMetadata::new("cut"));
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_bad_radius() {
        for radius in [-0.1, f64::NAN, f64::INFINITY] {
            let err = RadiusRegion::new(CanonicalPoint::ORIGIN, radius, InjuryMetadata::default())
                .unwrap_err();
            assert!(matches!(err, RegionError::InvalidRadius { .. }));
        }
    }

    #[test]
    fn edits_leave_original_untouched() {
        let original = RadiusRegion::new(
            CanonicalPoint::new(0.1, 0.2, 0.3),
            1.0,
            InjuryMetadata::new("burn"),
        )
        .unwrap();

        let moved = original.with_center(CanonicalPoint::ORIGIN);
        let grown = original.with_radius(4.0).unwrap();

        assert_eq!(original.center(), CanonicalPoint::new(0.1, 0.2, 0.3));
        assert_relative_eq!(original.radius(), 1.0);
        assert_eq!(moved.center(), CanonicalPoint::ORIGIN);
        assert_relative_eq!(moved.radius(), 1.0);
        assert_relative_eq!(grown.radius(), 4.0);
        assert!(original.with_radius(-2.0).is_err());
    }
}

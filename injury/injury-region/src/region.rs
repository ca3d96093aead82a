//! The injury region sum type.

use std::fmt;

use injury_canonical::CanonicalPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::metadata::InjuryMetadata;
use crate::polygon::PolygonRegion;
use crate::radius::RadiusRegion;

/// Shape of an injury region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RegionKind {
    /// Center plus radius.
    Radius,
    /// Vertex outline.
    Polygon,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radius => write!(f, "radius"),
            Self::Polygon => write!(f, "polygon"),
        }
    }
}

/// One recorded injury.
///
/// Serialized with a `kind` tag of `"radius"` or `"polygon"`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum InjuryRegion {
    /// A circular or point injury.
    Radius(RadiusRegion),
    /// An outlined injury.
    Polygon(PolygonRegion),
}

impl InjuryRegion {
    /// The region's shape.
    #[must_use]
    pub const fn kind(&self) -> RegionKind {
        match self {
            Self::Radius(_) => RegionKind::Radius,
            Self::Polygon(_) => RegionKind::Polygon,
        }
    }

    /// The metadata of either variant.
    #[must_use]
    pub const fn metadata(&self) -> &InjuryMetadata {
        match self {
            Self::Radius(r) => r.metadata(),
            Self::Polygon(p) => p.metadata(),
        }
    }

    /// The single point that represents this injury: a radius region's center
    /// or a polygon's centroid. `None` for a polygon with no vertices.
    #[must_use]
    pub const fn anchor(&self) -> Option<CanonicalPoint> {
        match self {
            Self::Radius(r) => Some(r.center()),
            Self::Polygon(p) => p.centroid(),
        }
    }

    /// The radius region, if this is one.
    #[must_use]
    pub const fn as_radius(&self) -> Option<&RadiusRegion> {
        match self {
            Self::Radius(r) => Some(r),
            Self::Polygon(_) => None,
        }
    }

    /// The polygon region, if this is one.
    #[must_use]
    pub const fn as_polygon(&self) -> Option<&PolygonRegion> {
        match self {
            Self::Polygon(p) => Some(p),
            Self::Radius(_) => None,
        }
    }
}

impl From<RadiusRegion> for InjuryRegion {
    fn from(region: RadiusRegion) -> Self {
        Self::Radius(region)
    }
}

impl From<PolygonRegion> for InjuryRegion {
    fn from(region: PolygonRegion) -> Self {
        Self::Polygon(region)
    }
}

//! Injury regions, case records and the case repository.
//!
//! Injuries are stored in canonical space (see `injury-canonical`) so that a
//! case recorded against one instance of the body model can be displayed on
//! any other instance. Each injury is one of two shapes:
//!
//! - [`RadiusRegion`] - a center point with a radius (`0` for a point injury)
//! - [`PolygonRegion`] - an ordered outline drawn click by click, with a derived centroid
//!
//! Both carry [`InjuryMetadata`] that this crate never interprets.
//!
//! Regions are immutable values: every edit returns a new region, so a region
//! that is being drawn can be displayed and undone without aliasing.
//!
//! Cases group the injuries of one casualty ([`CaseRecord`]) and live in a
//! [`CaseRepository`]; [`InMemoryCaseRepository`] is the provided
//! implementation.
//!
//! # Example
//!
//! ```
//! use injury_canonical::CanonicalPoint;
//! use injury_region::{InjuryMetadata, PolygonRegion, RegionError};
//!
//! let outline = PolygonRegion::new(InjuryMetadata::new("burn"))
//!     .with_vertex(CanonicalPoint::new(0.0, 0.0, 0.0))
//!     .with_vertex(CanonicalPoint::new(0.3, 0.0, 0.0));
//!
//! assert!(matches!(
//!     outline.clone().finalized(),
//!     Err(RegionError::TooFewVertices { actual: 2, .. })
//! ));
//!
//! let closed = outline
//!     .with_vertex(CanonicalPoint::new(0.0, 0.3, 0.0))
//!     .finalized()
//!     .unwrap();
//! assert_eq!(closed.centroid(), Some(CanonicalPoint::new(0.1, 0.1, 0.0)));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod case;
mod error;
mod metadata;
mod polygon;
mod radius;
mod region;
mod repository;

pub use case::CaseRecord;
pub use error::{RegionError, RegionResult};
pub use metadata::InjuryMetadata;
pub use polygon::{MIN_POLYGON_VERTICES, PolygonRegion};
pub use radius::RadiusRegion;
pub use region::{InjuryRegion, RegionKind};
pub use repository::{CaseRepository, InMemoryCaseRepository};

// Re-export for convenience
pub use injury_canonical::CanonicalPoint;

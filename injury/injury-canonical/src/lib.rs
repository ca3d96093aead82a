//! Canonical coordinates for injury locations.
//!
//! A click on a loaded body mesh lands at some world-space point whose value
//! depends on how that mesh happens to be scaled and placed. This crate maps
//! such points into *canonical space*: each axis rescaled to `[-1, 1]`
//! relative to the mesh's world bounding box. Canonical points are what gets
//! stored with a case, and they can be mapped back onto any later instance of
//! the same model.
//!
//! - [`normalize`] - world point to [`CanonicalPoint`], rounded to 4 decimals
//! - [`denormalize`] - exact inverse, full precision
//!
//! Points outside the box map outside `[-1, 1]`; nothing is clamped.
//!
//! # Example
//!
//! ```
//! use injury_canonical::{denormalize, normalize};
//! use injury_types::{BoundingBox, Point3};
//!
//! let bounds = BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
//!
//! let canonical = normalize(&Point3::new(5.0, 5.0, 5.0), &bounds).unwrap();
//! assert_eq!(canonical.to_point(), Point3::new(0.0, 0.0, 0.0));
//!
//! let world = denormalize(&canonical, &bounds);
//! assert_eq!(world, Point3::new(5.0, 5.0, 5.0));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod error;
mod normalize;
mod point;

pub use error::{CanonicalError, CanonicalResult};
pub use normalize::{denormalize, normalize};
pub use point::{CANONICAL_DECIMALS, CanonicalPoint};

//! Proximity heatmaps of recorded injuries over a body mesh.
//!
//! Two steps turn stored injuries into vertex colors:
//!
//! 1. [`project`] maps canonical regions into world space against the mesh's
//!    bounding box, producing [`Marker`]s for display.
//! 2. [`compute_heatmap`] scores each mesh triangle by the number of weighting
//!    markers within [`HeatmapParams::proximity_threshold`] of its centroid,
//!    normalizes by the highest score and maps the result through a
//!    [`ColorScale`].
//!
//! [`heatmap_for_regions`] runs both steps.
//!
//! # Example
//!
//! ```
//! use injury_canonical::CanonicalPoint;
//! use injury_heatmap::{heatmap_for_regions, HeatmapParams};
//! use injury_region::{InjuryMetadata, InjuryRegion, RadiusRegion};
//! use injury_types::{BodyMesh, Point3, VertexColor};
//!
//! let mesh = BodyMesh::new(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(3.0, 0.0, 0.0),
//!         Point3::new(0.0, 3.0, 3.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//! // Canonical (-1/3, -1/3, -1/3) is the triangle's centroid (1, 1, 1).
//! let region: InjuryRegion = RadiusRegion::point(
//!     CanonicalPoint::new(-0.3333, -0.3333, -0.3333),
//!     InjuryMetadata::new("burn"),
//! )
//! .into();
//!
//! let field = heatmap_for_regions(&[region], &mesh, &HeatmapParams::default()).unwrap();
//! assert_eq!(field.max_score, 1);
//! assert_eq!(field.colors, vec![VertexColor::RED; 3]);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod aggregate;
mod error;
mod field;
mod marker;
mod params;
mod scale;

pub use aggregate::{compute_heatmap, heatmap_for_regions};
pub use error::{HeatmapError, HeatmapResult};
pub use field::{HeatmapField, TriangleSample};
pub use marker::{Marker, MarkerRole, project, project_into, weighting_points};
pub use params::{HeatmapParams, ProximityThreshold};
pub use scale::ColorScale;

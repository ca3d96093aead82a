//! Record injuries on a 3D body model and aggregate them into heatmaps.
//!
//! This umbrella crate re-exports the `injury-*` crates. Injury locations are
//! stored in canonical coordinates relative to the model's bounding box, so
//! cases recorded on one model instance can be displayed and aggregated on
//! any other, whatever its scale or position.
//!
//! # Quick Start
//!
//! ```
//! use injury::prelude::*;
//!
//! // A small tetrahedron standing in for the body model.
//! let mesh = BodyMesh::new(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!         Point3::new(0.0, 0.0, 1.0),
//!     ],
//!     vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
//! );
//! let bounds = mesh.world_bounds();
//!
//! // Mark a point injury and store the case.
//! let mut session = MarkingSession::new("case-001");
//! session.set_metadata(InjuryMetadata::new("burn").with_body_area("left side"));
//! session.click(Some(Point3::new(0.3, 0.3, 0.0)), &bounds).unwrap();
//! session.commit().unwrap();
//!
//! let mut repo = InMemoryCaseRepository::new();
//! repo.save(session.take_case("case-002"));
//!
//! // Aggregate every stored injury.
//! let params = HeatmapParams::coarse();
//! let field = injury::analyze_repository(&repo, &mesh, &params).unwrap();
//! assert_eq!(field.colors.len(), mesh.vertex_count());
//! assert_eq!(field.max_score, 1);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Bounding boxes, transforms, triangles, colors, the loaded body mesh
//! - [`canonical`] - World to canonical coordinates and back
//! - [`region`] - Radius and polygon injuries, case records, the case repository
//! - [`heatmap`] - Marker projection and proximity heatmaps
//! - [`marking`] - The interactive marking session and ray picking
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for all public data types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

// =============================================================================
// Re-exports
// =============================================================================

/// Bounding boxes, transforms, triangles, colors and the loaded body mesh.
pub use injury_types as types;

/// World to canonical coordinates and back.
pub use injury_canonical as canonical;

/// Radius and polygon injuries, case records and the case repository.
pub use injury_region as region;

/// Marker projection and proximity heatmaps.
pub use injury_heatmap as heatmap;

/// The interactive marking session and ray picking.
pub use injury_marking as marking;

mod analysis;

pub use analysis::analyze_repository;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for injury mapping.
pub mod prelude {
    pub use injury_types::{BodyMesh, BoundingBox, Point3, Transform3D, Vector3, VertexColor};

    pub use injury_canonical::{CanonicalPoint, denormalize, normalize};

    pub use injury_region::{
        CaseRecord, CaseRepository, InMemoryCaseRepository, InjuryMetadata, InjuryRegion,
        PolygonRegion, RadiusRegion,
    };

    pub use injury_heatmap::{
        ColorScale, HeatmapField, HeatmapParams, Marker, ProximityThreshold, compute_heatmap,
        heatmap_for_regions, project,
    };

    pub use injury_marking::{DrawMode, MarkingSession, Ray, pick};
}

// =============================================================================
// Tests
// =============================================================================

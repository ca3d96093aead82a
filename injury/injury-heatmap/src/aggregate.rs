//! Proximity heatmap aggregation.
//!
//! Each triangle is scored by the number of markers within the proximity
//! threshold of its centroid, measured in the mesh's local frame. Scores are
//! normalized by the maximum score and mapped through the color scale.

// Scores are marker counts; casts are safe for practical marker sets.
#![allow(clippy::cast_precision_loss)]

use injury_canonical::CanonicalError;
use injury_region::InjuryRegion;
use injury_types::{BodyMesh, Point3, Triangle};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{HeatmapError, HeatmapResult};
use crate::field::{HeatmapField, TriangleSample};
use crate::marker::{project, weighting_points};
use crate::params::HeatmapParams;

/// Compute a heatmap over `mesh` from world-space marker positions.
///
/// The output has one color per vertex. Vertices start at the base color;
/// each triangle with a non-zero score then writes its color to its three
/// vertices in face order, so on a shared vertex the last scored face wins.
/// Use [`BodyMesh::unindexed`] for strictly per-triangle coloring.
///
/// A mesh with no triangles yields an empty field. With no markers every
/// vertex keeps the base color.
///
/// # Errors
///
/// Returns [`HeatmapError::Mesh`] if a face references a missing vertex or the
/// world transform cannot be inverted.
///
/// # Example
///
/// ```
/// use injury_heatmap::{compute_heatmap, HeatmapParams};
/// use injury_types::{BodyMesh, Point3, VertexColor};
///
/// let mesh = BodyMesh::new(
///     vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
///     vec![[0, 1, 2]],
/// );
/// let field = compute_heatmap(&mesh, &[Point3::new(0.3, 0.3, 0.0)], &HeatmapParams::default())
///     .unwrap();
/// assert_eq!(field.max_score, 1);
/// assert_eq!(field.colors, vec![VertexColor::RED; 3]);
/// ```
pub fn compute_heatmap(
    mesh: &BodyMesh,
    markers: &[Point3<f64>],
    params: &HeatmapParams,
) -> HeatmapResult<HeatmapField> {
    let triangles = mesh.local_triangles()?;
    if triangles.is_empty() {
        return Ok(HeatmapField::empty());
    }

    let to_local = mesh.world_to_local()?;
    let local_markers: Vec<Point3<f64>> = markers
        .iter()
        .map(|m| to_local.transform_point(m))
        .collect();

    let threshold = params.proximity_threshold.get();
    info!(
        triangles = triangles.len(),
        markers = local_markers.len(),
        threshold,
        parallel = params.parallel,
        "Starting heatmap aggregation"
    );

    let samples: Vec<TriangleSample> = if params.parallel {
        triangles
            .par_iter()
            .map(|tri| sample(tri, &local_markers, threshold))
            .collect()
    } else {
        triangles
            .iter()
            .map(|tri| sample(tri, &local_markers, threshold))
            .collect()
    };

    let max_score = samples.iter().map(|s| s.score).max().unwrap_or(0);

    let mut colors = vec![params.base_color; mesh.vertex_count()];
    if max_score > 0 {
        for (face, sample) in mesh.faces.iter().zip(&samples) {
            if sample.score == 0 {
                continue;
            }
            let color = params
                .color_scale
                .sample(sample.score as f64 / max_score as f64);
            for &index in face {
                colors[index as usize] = color;
            }
        }
    } else {
        debug!("No triangle within threshold of any marker");
    }

    let field = HeatmapField {
        colors,
        samples,
        max_score,
    };
    info!(
        max_score,
        scored = field.scored_triangle_count(),
        "Heatmap aggregation complete"
    );
    Ok(field)
}

/// Project `regions` onto `mesh` and compute the heatmap of their weighting
/// markers (radius centers and polygon centroids).
///
/// # Errors
///
/// Returns [`HeatmapError::Canonical`] if there are regions to project and the
/// mesh's world bounding box is flat on some axis, and [`HeatmapError::Mesh`] for a structurally invalid
/// mesh.
pub fn heatmap_for_regions(
    regions: &[InjuryRegion],
    mesh: &BodyMesh,
    params: &HeatmapParams,
) -> HeatmapResult<HeatmapField> {
    mesh.validate()?;
    if mesh.faces.is_empty() {
        return Ok(HeatmapField::empty());
    }

    let bounds = mesh.world_bounds();
    let markers = project(regions, &bounds);
    if !markers.is_empty() {
        if let Some((axis, extent)) = bounds.degenerate_axis() {
            return Err(CanonicalError::DegenerateBounds { axis, extent }.into());
        }
    }

    let points = weighting_points(&markers);
    debug!(
        regions = regions.len(),
        markers = markers.len(),
        weighting = points.len(),
        "Projected regions"
    );
    compute_heatmap(mesh, &points, params)
}

fn sample(triangle: &Triangle, markers: &[Point3<f64>], threshold: f64) -> TriangleSample {
    let centroid_local = triangle.centroid();
    let score = markers
        .iter()
        .filter(|m| (*m - centroid_local).norm() <= threshold)
        .count();
    TriangleSample {
        centroid_local,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ColorScale;
    use injury_canonical::{normalize, CanonicalPoint};
    use injury_region::{InjuryMetadata, PolygonRegion, RadiusRegion};
    use injury_types::{Axis, MeshError, Transform3D, VertexColor};

    /// Two separate triangles with centroids at (0, 0, 0) and (5, 5, 5).
    fn two_triangles() -> BodyMesh {
        BodyMesh::new(
            vec![
                Point3::new(-1.0, -1.0, 0.0),
                Point3::new(1.0, -1.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
                Point3::new(4.0, 4.0, 5.0),
                Point3::new(6.0, 4.0, 5.0),
                Point3::new(5.0, 7.0, 5.0),
            ],
            vec![[0, 1, 2], [3, 4, 5]],
        )
    }

    fn params(threshold: f64) -> HeatmapParams {
        HeatmapParams::default().with_threshold(threshold).unwrap()
    }

    #[test]
    fn single_marker_scores_nearest_triangle() {
        let mesh = two_triangles();
        let field = compute_heatmap(&mesh, &[Point3::new(0.05, 0.0, 0.0)], &params(0.15)).unwrap();

        let scores: Vec<_> = field.samples.iter().map(|s| s.score).collect();
        assert_eq!(scores, [1, 0]);
        assert_eq!(field.max_score, 1);
        assert_eq!(field.colors[..3], [VertexColor::RED; 3]);
        assert_eq!(field.colors[3..], [VertexColor::WHITE; 3]);
    }

    #[test]
    fn scores_normalize_against_max() {
        let mesh = two_triangles();
        let markers = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.01, 0.0, 0.0),
            Point3::new(5.0, 5.0, 5.0),
        ];
        let scale = ColorScale::new(VertexColor::new(0, 0, 0), VertexColor::new(200, 200, 200));
        let field = compute_heatmap(&mesh, &markers, &params(0.1).with_color_scale(scale)).unwrap();

        assert_eq!(field.max_score, 2);
        assert_eq!(field.normalized_score(1), Some(0.5));
        assert_eq!(field.colors[0], VertexColor::new(200, 200, 200));
        assert_eq!(field.colors[3], VertexColor::new(100, 100, 100));
    }

    #[test]
    fn no_markers_leaves_base_color() {
        let mesh = two_triangles();
        let base = VertexColor::new(10, 20, 30);
        let field =
            compute_heatmap(&mesh, &[], &HeatmapParams::default().with_base_color(base)).unwrap();
        assert_eq!(field.max_score, 0);
        assert_eq!(field.scored_triangle_count(), 0);
        assert_eq!(field.colors, vec![base; 6]);
        assert_eq!(field.normalized_score(0), Some(0.0));
    }

    #[test]
    fn far_markers_score_nothing() {
        let field = compute_heatmap(
            &two_triangles(),
            &[Point3::new(100.0, 0.0, 0.0)],
            &HeatmapParams::default(),
        )
        .unwrap();
        assert_eq!(field.max_score, 0);
        assert_eq!(field.colors, vec![VertexColor::WHITE; 6]);
    }

    #[test]
    fn empty_mesh_yields_empty_field() {
        let field = compute_heatmap(
            &BodyMesh::default(),
            &[Point3::origin()],
            &HeatmapParams::default(),
        )
        .unwrap();
        assert_eq!(field, HeatmapField::empty());
    }

    #[test]
    fn aggregation_is_idempotent_and_parallel_matches() {
        let mesh = two_triangles();
        let markers = [Point3::new(0.05, 0.0, 0.0), Point3::new(5.0, 5.1, 5.0)];
        let serial = params(0.5);
        let first = compute_heatmap(&mesh, &markers, &serial).unwrap();
        let second = compute_heatmap(&mesh, &markers, &serial).unwrap();
        let parallel = compute_heatmap(&mesh, &markers, &serial.with_parallel(true)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, parallel);
    }

    #[test]
    fn markers_are_moved_into_local_frame() {
        // Mesh scaled by 10 in world space: world (0.5, 0, 0) is local (0.05, 0, 0).
        let mesh = two_triangles().with_world_transform(Transform3D::uniform_scale(10.0));
        let field = compute_heatmap(&mesh, &[Point3::new(0.5, 0.0, 0.0)], &params(0.15)).unwrap();
        assert_eq!(field.samples[0].score, 1);

        // A world-space distance of 1.0 is only 0.1 in local units.
        let field = compute_heatmap(&mesh, &[Point3::new(51.0, 50.0, 50.0)], &params(0.15)).unwrap();
        assert_eq!(field.samples[1].score, 1);
    }

    #[test]
    fn shared_vertex_takes_last_scored_face() {
        let mesh = BodyMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(3.0, 0.0, 0.0),
                Point3::new(0.0, 3.0, 0.0),
                Point3::new(3.0, 3.0, 0.0),
            ],
            vec![[0, 1, 2], [1, 3, 2]],
        );
        // Two markers near the first centroid (1, 1, 0), one near the second (2, 2, 0).
        let markers = [
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.1),
            Point3::new(2.0, 2.0, 0.0),
        ];
        let field = compute_heatmap(&mesh, &markers, &params(0.5)).unwrap();
        let low = ColorScale::default().sample(0.5);
        assert_eq!(field.colors[0], VertexColor::RED);
        assert_eq!(field.colors[1], low);
        assert_eq!(field.colors[2], low);
        assert_eq!(field.colors[3], low);

        let flat = compute_heatmap(&mesh.unindexed().unwrap(), &markers, &params(0.5)).unwrap();
        assert_eq!(flat.colors[..3], [VertexColor::RED; 3]);
        assert_eq!(flat.colors[3..], [low; 3]);
    }

    #[test]
    fn invalid_mesh_is_an_error() {
        let broken = BodyMesh::new(vec![Point3::origin()], vec![[0, 1, 2]]);
        assert!(matches!(
            compute_heatmap(&broken, &[], &HeatmapParams::default()),
            Err(HeatmapError::Mesh(MeshError::FaceIndexOutOfRange { .. }))
        ));

        let singular = two_triangles().with_world_transform(Transform3D::uniform_scale(0.0));
        assert!(matches!(
            compute_heatmap(&singular, &[], &HeatmapParams::default()),
            Err(HeatmapError::Mesh(MeshError::NonInvertibleTransform))
        ));
    }

    #[test]
    fn regions_pipeline_matches_manual_projection() {
        let mesh = two_triangles();
        let bounds = mesh.world_bounds();
        let near_first = normalize(&Point3::new(0.0, 0.0, 0.0), &bounds).unwrap();
        let regions: Vec<InjuryRegion> = vec![
            RadiusRegion::point(near_first, InjuryMetadata::new("cut")).into(),
            PolygonRegion::from_vertices(
                vec![near_first, CanonicalPoint::new(1.0, 1.0, 1.0)],
                InjuryMetadata::new("burn"),
            )
            .into(),
        ];

        let field = heatmap_for_regions(&regions, &mesh, &params(0.2)).unwrap();
        // Radius center scores the first triangle; outline vertices do not weigh.
        assert_eq!(field.samples[0].score, 1);
        assert_eq!(field.samples[1].score, 0);
    }

    #[test]
    fn regions_on_flat_mesh_are_rejected() {
        let flat = BodyMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        let region: InjuryRegion =
            RadiusRegion::point(CanonicalPoint::ORIGIN, InjuryMetadata::default()).into();

        assert_eq!(
            heatmap_for_regions(&[region], &flat, &HeatmapParams::default()).unwrap_err(),
            HeatmapError::Canonical(CanonicalError::DegenerateBounds {
                axis: Axis::Z,
                extent: 0.0,
            })
        );
        // Nothing to project: plain base-color field.
        let field = heatmap_for_regions(&[], &flat, &HeatmapParams::default()).unwrap();
        assert_eq!(field.colors, vec![VertexColor::WHITE; 3]);
    }

    #[test]
    fn empty_outline_on_flat_mesh_projects_nothing() {
        let flat = BodyMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        let outline: InjuryRegion = PolygonRegion::new(InjuryMetadata::new("burn")).into();

        let field = heatmap_for_regions(&[outline], &flat, &HeatmapParams::default()).unwrap();
        assert_eq!(field.colors, vec![VertexColor::WHITE; 3]);
        assert_eq!(field.max_score, 0);
    }
}

//! Heatmaps over every injury in a case repository.

use injury_canonical::CanonicalError;
use injury_heatmap::{
    HeatmapField, HeatmapParams, HeatmapResult, compute_heatmap, project_into, weighting_points,
};
use injury_region::CaseRepository;
use injury_types::BodyMesh;
use tracing::info;

/// Aggregate every injury of every stored case into a heatmap over `mesh`.
///
/// Equivalent to [`injury_heatmap::heatmap_for_regions`] over the
/// concatenation of all cases' injuries, without copying them.
///
/// # Errors
///
/// Same as [`injury_heatmap::heatmap_for_regions`].
///
/// # Example
///
/// ```
/// use injury::prelude::*;
///
/// let mesh = BodyMesh::new(
///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0), Point3::new(0.0, 2.0, 2.0)],
///     vec![[0, 1, 2]],
/// );
/// let mut repo = InMemoryCaseRepository::new();
/// repo.save(CaseRecord::new("empty"));
///
/// let field = injury::analyze_repository(&repo, &mesh, &HeatmapParams::default()).unwrap();
/// assert_eq!(field.max_score, 0);
/// assert_eq!(field.colors, vec![VertexColor::WHITE; 3]);
/// ```
pub fn analyze_repository(
    repository: &impl CaseRepository,
    mesh: &BodyMesh,
    params: &HeatmapParams,
) -> HeatmapResult<HeatmapField> {
    mesh.validate()?;
    if mesh.faces.is_empty() {
        return Ok(HeatmapField::empty());
    }

    let bounds = mesh.world_bounds();
    let mut markers = Vec::new();
    let mut injuries = 0_usize;
    for region in repository.all_injuries() {
        if injuries == 0 {
            if let Some((axis, extent)) = bounds.degenerate_axis() {
                return Err(CanonicalError::DegenerateBounds { axis, extent }.into());
            }
        }
        project_into(region, &bounds, &mut markers);
        injuries += 1;
    }

    info!(
        cases = repository.len(),
        injuries,
        markers = markers.len(),
        "Analyzing case repository"
    );
    compute_heatmap(mesh, &weighting_points(&markers), params)
}

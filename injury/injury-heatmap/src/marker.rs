//! Projecting canonical injury regions onto a concrete mesh.

use injury_canonical::denormalize;
use injury_region::InjuryRegion;
use injury_types::{BoundingBox, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What part of a region a marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarkerRole {
    /// Center of a radius region.
    Center,
    /// One outline vertex of a polygon region.
    Vertex,
    /// Centroid of a polygon region.
    Centroid,
}

impl MarkerRole {
    /// Whether markers with this role count towards heatmap scores.
    ///
    /// Outline vertices are drawn but not weighted, so every injury
    /// contributes exactly one point to the heatmap.
    #[must_use]
    pub const fn is_weighting(self) -> bool {
        matches!(self, Self::Center | Self::Centroid)
    }
}

/// A world-space render point derived from an injury region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Marker {
    /// Position in world space.
    pub world_position: Point3<f64>,
    /// What the marker stands for.
    pub role: MarkerRole,
}

impl Marker {
    /// Create a marker.
    #[must_use]
    pub const fn new(world_position: Point3<f64>, role: MarkerRole) -> Self {
        Self {
            world_position,
            role,
        }
    }
}

/// Project regions into world space against `bounds`.
///
/// A radius region yields one [`MarkerRole::Center`] marker. A polygon yields
/// one [`MarkerRole::Vertex`] marker per vertex followed by one
/// [`MarkerRole::Centroid`] marker; an empty polygon yields nothing. Polygons
/// that are still being drawn project whatever vertices they have.
///
/// # Example
///
/// ```
/// use injury_canonical::CanonicalPoint;
/// use injury_heatmap::{project, MarkerRole};
/// use injury_region::{InjuryMetadata, InjuryRegion, RadiusRegion};
/// use injury_types::{BoundingBox, Point3};
///
/// let bounds = BoundingBox::new(Point3::origin(), Point3::new(10.0, 10.0, 10.0));
/// let region: InjuryRegion =
///     RadiusRegion::point(CanonicalPoint::ORIGIN, InjuryMetadata::new("cut")).into();
///
/// let markers = project(&[region], &bounds);
/// assert_eq!(markers.len(), 1);
/// assert_eq!(markers[0].role, MarkerRole::Center);
/// assert_eq!(markers[0].world_position, Point3::new(5.0, 5.0, 5.0));
/// ```
#[must_use]
pub fn project(regions: &[InjuryRegion], bounds: &BoundingBox) -> Vec<Marker> {
    let mut markers = Vec::new();
    for region in regions {
        project_into(region, bounds, &mut markers);
    }
    markers
}

/// Project a single region, appending its markers to `out`.
pub fn project_into(region: &InjuryRegion, bounds: &BoundingBox, out: &mut Vec<Marker>) {
    match region {
        InjuryRegion::Radius(radius) => {
            out.push(Marker::new(
                denormalize(&radius.center(), bounds),
                MarkerRole::Center,
            ));
        }
        InjuryRegion::Polygon(polygon) => {
            out.extend(
                polygon
                    .vertices()
                    .iter()
                    .map(|v| Marker::new(denormalize(v, bounds), MarkerRole::Vertex)),
            );
            if let Some(centroid) = polygon.centroid() {
                out.push(Marker::new(
                    denormalize(&centroid, bounds),
                    MarkerRole::Centroid,
                ));
            }
        }
    }
}

/// World positions of the markers that count towards heatmap scores.
#[must_use]
pub fn weighting_points(markers: &[Marker]) -> Vec<Point3<f64>> {
    markers
        .iter()
        .filter(|m| m.role.is_weighting())
        .map(|m| m.world_position)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use injury_canonical::CanonicalPoint;
    use injury_region::{InjuryMetadata, PolygonRegion, RadiusRegion};

    fn bounds() -> BoundingBox {
        BoundingBox::new(Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 2.0, 4.0))
    }

    #[test]
    fn empty_region_list() {
        assert!(project(&[], &bounds()).is_empty());
    }

    #[test]
    fn polygon_projects_vertices_then_centroid() {
        let polygon = PolygonRegion::from_vertices(
            vec![
                CanonicalPoint::new(-1.0, -1.0, -1.0),
                CanonicalPoint::new(1.0, -1.0, -1.0),
                CanonicalPoint::new(0.0, 1.0, 1.0),
            ],
            InjuryMetadata::default(),
        );
        let markers = project(&[polygon.into()], &bounds());

        let roles: Vec<_> = markers.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            [
                MarkerRole::Vertex,
                MarkerRole::Vertex,
                MarkerRole::Vertex,
                MarkerRole::Centroid,
            ]
        );
        assert_eq!(markers[0].world_position, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(markers[2].world_position, Point3::new(0.0, 2.0, 4.0));

        // Centroid (0, -0.3333, -0.3333) in canonical space.
        let centroid = markers[3].world_position;
        assert_relative_eq!(centroid.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(centroid.y, (1.0 - 0.3333) / 2.0 * 2.0, epsilon = 1e-12);
        assert_relative_eq!(centroid.z, (1.0 - 0.3333) / 2.0 * 4.0, epsilon = 1e-12);
    }

    #[test]
    fn unfinished_polygon_projects_what_it_has() {
        let one = PolygonRegion::new(InjuryMetadata::default())
            .with_vertex(CanonicalPoint::new(0.5, 0.5, 0.5));
        let markers = project(&[one.into()], &bounds());
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].world_position, markers[1].world_position);

        let empty = PolygonRegion::new(InjuryMetadata::default());
        assert!(project(&[empty.into()], &bounds()).is_empty());
    }

    #[test]
    fn only_centers_and_centroids_weigh() {
        let regions: Vec<InjuryRegion> = vec![
            RadiusRegion::point(CanonicalPoint::ORIGIN, InjuryMetadata::default()).into(),
            PolygonRegion::from_vertices(
                vec![CanonicalPoint::ORIGIN; 4],
                InjuryMetadata::default(),
            )
            .into(),
        ];
        let markers = project(&regions, &bounds());
        assert_eq!(markers.len(), 6);
        assert_eq!(weighting_points(&markers).len(), 2);
    }
}

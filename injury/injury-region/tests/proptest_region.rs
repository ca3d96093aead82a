//! Property-based tests for polygon regions.
//!
//! Run with: cargo test -p injury-region -- proptest

#![allow(clippy::unwrap_used)]

use injury_region::{CanonicalPoint, InjuryMetadata, PolygonRegion, RegionError};
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = CanonicalPoint> {
    prop::array::uniform3(-1.0..1.0f64).prop_map(|c| CanonicalPoint::new(c[0], c[1], c[2]))
}

fn arb_points(max: usize) -> impl Strategy<Value = Vec<CanonicalPoint>> {
    prop::collection::vec(arb_point(), 0..max)
}

fn build(points: &[CanonicalPoint]) -> PolygonRegion {
    points
        .iter()
        .fold(PolygonRegion::new(InjuryMetadata::default()), |poly, p| {
            poly.with_vertex(*p)
        })
}

proptest! {
    #[test]
    fn proptest_centroid_matches_mean(points in arb_points(12)) {
        let poly = build(&points);
        prop_assert_eq!(poly.centroid(), CanonicalPoint::mean(&points));
        prop_assert_eq!(poly.len(), points.len());
    }

    #[test]
    fn proptest_centroid_inside_vertex_bounds(points in arb_points(12)) {
        prop_assume!(!points.is_empty());
        let c = build(&points).centroid().unwrap();
        let lo = points.iter().map(CanonicalPoint::x).fold(f64::INFINITY, f64::min);
        let hi = points.iter().map(CanonicalPoint::x).fold(f64::NEG_INFINITY, f64::max);
        // Rounding may push the mean by half a unit in the fourth decimal.
        prop_assert!(c.x() >= lo - 0.5e-4 - 1e-12);
        prop_assert!(c.x() <= hi + 0.5e-4 + 1e-12);
    }

    #[test]
    fn proptest_remove_then_centroid_recomputed(points in arb_points(12), pick in any::<prop::sample::Index>()) {
        prop_assume!(!points.is_empty());
        let index = pick.index(points.len());
        let poly = build(&points).without_vertex(index).unwrap();

        let mut expected = points.clone();
        expected.remove(index);
        prop_assert_eq!(poly.vertices(), expected.as_slice());
        prop_assert_eq!(poly.centroid(), CanonicalPoint::mean(&expected));
    }

    #[test]
    fn proptest_finalize_threshold(points in arb_points(8)) {
        let result = build(&points).finalized();
        if points.len() >= 3 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(
                result.unwrap_err(),
                RegionError::TooFewVertices { required: 3, actual: points.len() }
            );
        }
    }
}

//! Property-based tests for canonical coordinates.
//!
//! Run with: cargo test -p injury-canonical -- proptest

#![allow(clippy::unwrap_used)]

use injury_canonical::{denormalize, normalize};
use injury_types::{Axis, BoundingBox, Point3};
use proptest::prelude::*;

/// A non-degenerate box with extents between 0.5 and 200 on every axis.
fn arb_bounds() -> impl Strategy<Value = BoundingBox> {
    (
        prop::array::uniform3(-100.0..100.0f64),
        prop::array::uniform3(0.5..200.0f64),
    )
        .prop_map(|(min, size)| {
            BoundingBox::new(
                Point3::new(min[0], min[1], min[2]),
                Point3::new(min[0] + size[0], min[1] + size[1], min[2] + size[2]),
            )
        })
}

/// A box together with a point strictly inside it.
fn arb_bounds_and_inner_point() -> impl Strategy<Value = (BoundingBox, Point3<f64>)> {
    (arb_bounds(), prop::array::uniform3(0.001..0.999f64)).prop_map(|(bounds, t)| {
        let size = bounds.size();
        let p = Point3::new(
            bounds.min.x + t[0] * size.x,
            bounds.min.y + t[1] * size.y,
            bounds.min.z + t[2] * size.z,
        );
        (bounds, p)
    })
}

proptest! {
    #[test]
    fn proptest_round_trip_within_rounding((bounds, p) in arb_bounds_and_inner_point()) {
        let back = denormalize(&normalize(&p, &bounds).unwrap(), &bounds);
        for axis in Axis::ALL {
            let i = axis.index();
            // Half a unit in the fourth decimal of canonical space, scaled back to world units.
            let tolerance = 0.5e-4 / 2.0 * bounds.extent(axis) + 1e-9;
            prop_assert!((back[i] - p[i]).abs() <= tolerance);
        }
    }

    #[test]
    fn proptest_round_trip_unit_box(t in prop::array::uniform3(-0.999..0.999f64)) {
        let bounds = BoundingBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let p = Point3::new(t[0], t[1], t[2]);
        let back = denormalize(&normalize(&p, &bounds).unwrap(), &bounds);
        prop_assert!((back - p).abs().max() <= 1e-4);
    }

    #[test]
    fn proptest_inside_points_stay_in_range((bounds, p) in arb_bounds_and_inner_point()) {
        let c = normalize(&p, &bounds).unwrap();
        for v in [c.x(), c.y(), c.z()] {
            prop_assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn proptest_outside_points_leave_range(bounds in arb_bounds(), overshoot in 0.1..5.0f64) {
        let size = bounds.size();
        let p = Point3::new(bounds.max.x + overshoot * size.x, bounds.center().y, bounds.center().z);
        let c = normalize(&p, &bounds).unwrap();
        prop_assert!(c.x() > 1.0);
    }
}

//! Property tests for the geodesic distance primitive.

use fieldtrack_analysis::distance_meters;
use fieldtrack_core::models::Coordinate;
use proptest::prelude::*;

fn coordinates() -> impl Strategy<Value = Coordinate> {
    (-85.0..85.0f64, -180.0..180.0f64).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in coordinates(), b in coordinates()) {
        let ab = distance_meters(a, b);
        let ba = distance_meters(b, a);

        prop_assert!((ab - ba).abs() <= 1e-6 * ab.abs().max(1.0));
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinates()) {
        prop_assert!(distance_meters(a, a).abs() < 1e-6);
    }

    #[test]
    fn distance_is_non_negative_and_finite(a in coordinates(), b in coordinates()) {
        let d = distance_meters(a, b);

        prop_assert!(d.is_finite());
        prop_assert!(d >= 0.0);
    }
}

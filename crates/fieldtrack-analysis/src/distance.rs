//! Geodesic distance primitive shared by the dwell detectors and the
//! route ordering.

use fieldtrack_core::models::Coordinate;
use geo::{Distance, HaversineMeasure};

/// Sphere radius used for all breadcrumb distances, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates in meters.
///
/// Haversine on a 6371 km sphere. No ellipsoidal correction and no
/// projection: at city-scale technician routing the error is below
/// practical significance. NaN coordinates propagate into the result;
/// every downstream threshold comparison against NaN is false, so the
/// detectors degrade to "no finding" rather than misfire. Callers own
/// input sanitization.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_METERS).distance(a.to_point(), b.to_point())
}

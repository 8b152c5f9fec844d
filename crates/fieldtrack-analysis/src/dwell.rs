//! Dwell detection over a shift's breadcrumb trail.
//!
//! Both checks reduce to finding the boundary of a contiguous near-anchor
//! run: the late-start check walks forward from punch-in looking for the
//! latest point still near the origin, the late-punch-out check walks
//! backward from punch-out looking for the earliest point still near the
//! destination.

use fieldtrack_core::config::AnalyzerConfig;
use fieldtrack_core::models::{
    AnalysisResult, Coordinate, GeoPoint, LatePunchOutFinding, LateStartFinding, MovementWindow,
};

use crate::distance::distance_meters;

/// Run both dwell checks over one movement window.
///
/// Checks whose inputs are missing (no start anchor, no punch-out time,
/// no end anchor) are skipped silently; an empty breadcrumb sequence
/// produces no findings.
pub fn analyze_window(window: &MovementWindow, config: &AnalyzerConfig) -> AnalysisResult {
    AnalysisResult {
        late_start: detect_late_start(window, config),
        late_punch_out: detect_late_punch_out(window, config),
    }
}

/// Check whether the technician lingered near the start anchor after
/// punch-in.
///
/// Scans the breadcrumbs oldest-first for the maximal leading run within
/// the proximity threshold of the start location. The last point of that
/// run marks the departure; the elapsed minutes between punch-in and that
/// point must reach the idle threshold to raise a finding. The scan stops
/// at the first far point, so a later return to the origin is out of
/// scope here.
pub fn detect_late_start(
    window: &MovementWindow,
    config: &AnalyzerConfig,
) -> Option<LateStartFinding> {
    let start_location = match &window.start_location {
        Some(location) => location,
        None => {
            tracing::debug!("late-start check skipped: window has no start location");
            return None;
        }
    };

    // Breadcrumb feeds are expected oldest-first, but nothing upstream
    // enforces it. Sort here rather than trust the caller.
    let mut breadcrumbs: Vec<&GeoPoint> = window.breadcrumbs.iter().collect();
    breadcrumbs.sort_by_key(|point| point.recorded_at);

    let boundary = near_run_boundary(
        breadcrumbs,
        start_location.coordinate(),
        config.proximity_meters.value,
    )?;

    let idle_minutes = boundary.recorded_at.signed_duration_since(window.started_at).num_minutes();

    if idle_minutes >= config.idle_minutes.value {
        Some(LateStartFinding::new(idle_minutes))
    } else {
        None
    }
}

/// Check whether the technician reached the end anchor well before
/// punching out.
///
/// Keeps only breadcrumbs recorded at or before punch-out, then scans them
/// newest-first for the maximal trailing run within the proximity
/// threshold of the end location. The chronologically earliest point of
/// that run is the inferred real arrival; the elapsed minutes between it
/// and punch-out must reach the idle threshold to raise a finding.
pub fn detect_late_punch_out(
    window: &MovementWindow,
    config: &AnalyzerConfig,
) -> Option<LatePunchOutFinding> {
    let ended_at = match window.ended_at {
        Some(ended_at) => ended_at,
        None => {
            tracing::debug!("late-punch-out check skipped: shift is still open");
            return None;
        }
    };
    let end_location = match &window.end_location {
        Some(location) => location,
        None => {
            tracing::debug!("late-punch-out check skipped: window has no end location");
            return None;
        }
    };

    let mut breadcrumbs: Vec<&GeoPoint> = window
        .breadcrumbs
        .iter()
        .filter(|point| point.recorded_at <= ended_at)
        .collect();
    breadcrumbs.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

    let arrival = near_run_boundary(
        breadcrumbs,
        end_location.coordinate(),
        config.proximity_meters.value,
    )?;

    let delay_minutes = ended_at.signed_duration_since(arrival.recorded_at).num_minutes();

    if delay_minutes >= config.idle_minutes.value {
        Some(LatePunchOutFinding::new(arrival.recorded_at, delay_minutes))
    } else {
        None
    }
}

/// Walk `points` in the given order and return the last point of the
/// maximal leading run within `threshold_meters` of `anchor`.
///
/// The threshold boundary is inclusive: a point exactly at the threshold
/// counts as near. The first far point ends the run; re-entries past it
/// are never examined. `None` when the first point is already far (or
/// there are no points).
fn near_run_boundary<'a, I>(
    points: I,
    anchor: Coordinate,
    threshold_meters: f64,
) -> Option<&'a GeoPoint>
where
    I: IntoIterator<Item = &'a GeoPoint>,
{
    let mut boundary = None;

    for point in points {
        if distance_meters(point.coordinate(), anchor) <= threshold_meters {
            boundary = Some(point);
        } else {
            break;
        }
    }

    boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};
    use fieldtrack_core::models::ReferenceLocation;

    fn shift_start() -> DateTime<Utc> {
        "2026-03-02T08:00:00Z".parse().unwrap()
    }

    fn crumb(latitude: f64, longitude: f64, minutes_in: i64) -> GeoPoint {
        GeoPoint::new(latitude, longitude, shift_start() + Duration::minutes(minutes_in))
    }

    #[test]
    fn test_near_run_boundary_stops_at_first_far_point() {
        let anchor = Coordinate::new(0.0, 0.0);
        let points = vec![
            crumb(0.0, 0.0, 1),
            crumb(0.0001, 0.0001, 5),
            crumb(1.0, 1.0, 10), // ~157 km out, ends the run
            crumb(0.0, 0.0, 15), // re-entry, never examined
        ];

        let boundary = near_run_boundary(&points, anchor, 200.0).unwrap();

        assert_eq!(boundary.recorded_at, points[1].recorded_at);
    }

    #[test]
    fn test_near_run_boundary_none_when_first_point_is_far() {
        let anchor = Coordinate::new(0.0, 0.0);
        let points = vec![crumb(1.0, 1.0, 1), crumb(0.0, 0.0, 5)];

        assert!(near_run_boundary(&points, anchor, 200.0).is_none());
    }

    #[test]
    fn test_near_run_boundary_threshold_is_inclusive() {
        let anchor = Coordinate::new(0.0, 0.0);
        // ~111.19 m north of the anchor
        let point = crumb(0.001, 0.0, 1);
        let threshold = distance_meters(point.coordinate(), anchor);

        let points = vec![point];

        assert!(near_run_boundary(&points, anchor, threshold).is_some());
    }

    #[test]
    fn test_late_start_ignores_out_of_order_feed() {
        // Same trail as the detection case, delivered shuffled
        let window = MovementWindow::new(shift_start())
            .start_location(ReferenceLocation::new("start", 0.0, 0.0))
            .breadcrumbs(vec![crumb(1.0, 1.0, 26), crumb(0.0, 0.0, 25), crumb(0.0, 0.0, 5)]);
        let config = AnalyzerConfig::with_defaults();

        let finding = detect_late_start(&window, &config).unwrap();

        assert_eq!(finding.idle_minutes, 25);
    }

    #[test]
    fn test_skipped_checks_produce_no_findings() {
        // No anchors and no punch-out: nothing to measure against
        let window =
            MovementWindow::new(shift_start()).breadcrumbs(vec![crumb(0.0, 0.0, 30)]);
        let config = AnalyzerConfig::with_defaults();

        let result = analyze_window(&window, &config);

        assert!(!result.has_findings());
    }
}

//! Greedy nearest-neighbor route ordering.

use fieldtrack_core::models::{Coordinate, JobSite, Route};

use crate::distance::distance_meters;

/// Suggest a visiting order over `jobs` with a nearest-neighbor tour.
///
/// The tour is seeded with the earliest-scheduled job and grows by
/// repeatedly appending the strictly-nearest unvisited site; ties keep
/// the first candidate seen, so the ordering is deterministic for a given
/// input. O(n²) distance evaluations, sized for a technician's daily job
/// count in the low tens.
///
/// `base` stands in for any job site without a geocoded coordinate.
/// The result is advisory: a classic greedy tour construction with no
/// optimality bound, never a guarantee of the shortest route.
pub fn order_route(jobs: &[JobSite], base: Coordinate) -> Route {
    if jobs.len() <= 1 {
        return Route::new(jobs.to_vec(), 0.0);
    }

    let mut remaining: Vec<JobSite> = jobs.to_vec();
    let mut stops: Vec<JobSite> = Vec::with_capacity(remaining.len());
    let mut total_distance_m = 0.0;

    let seed = remaining.remove(earliest_scheduled(&remaining));
    let mut current = coordinate_or_base(&seed, base);
    stops.push(seed);

    while !remaining.is_empty() {
        let mut nearest = 0;
        let mut nearest_distance = f64::INFINITY;

        for (idx, candidate) in remaining.iter().enumerate() {
            let d = distance_meters(current, coordinate_or_base(candidate, base));
            if d < nearest_distance {
                nearest = idx;
                nearest_distance = d;
            }
        }

        let next = remaining.remove(nearest);
        total_distance_m += nearest_distance;
        current = coordinate_or_base(&next, base);
        stops.push(next);
    }

    Route::new(stops, total_distance_m)
}

/// Index of the earliest-scheduled job; ties keep the first occurrence.
fn earliest_scheduled(jobs: &[JobSite]) -> usize {
    let mut best = 0;
    for (idx, job) in jobs.iter().enumerate().skip(1) {
        if job.scheduled_at < jobs[best].scheduled_at {
            best = idx;
        }
    }
    best
}

fn coordinate_or_base(job: &JobSite, base: Coordinate) -> Coordinate {
    job.coordinate.unwrap_or(base)
}

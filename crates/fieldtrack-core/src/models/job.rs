use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A job site to visit: the upstream record id, its geocoded coordinate,
/// and the scheduled appointment slot.
///
/// Constructed fresh per optimization call from upstream job records; the
/// analyzer only reads coordinates and never mutates the source records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSite {
    pub id: String,

    /// Geocoded coordinate; `None` when the job's address has not been
    /// geocoded yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,

    pub scheduled_at: DateTime<Utc>,
}

impl JobSite {
    pub fn new(id: impl Into<String>, scheduled_at: DateTime<Utc>) -> Self {
        Self { id: id.into(), coordinate: None, scheduled_at }
    }

    pub fn located_at(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinate = Some(Coordinate::new(latitude, longitude));
        self
    }
}

/// A suggested visiting order over a set of job sites.
///
/// Advisory only: produced fresh each call, never stored, and callers must
/// not assume the tour is globally optimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// The input job sites, reordered.
    pub stops: Vec<JobSite>,

    /// Summed leg length of the ordering in meters.
    pub total_distance_m: f64,
}

impl Route {
    pub fn new(stops: Vec<JobSite>, total_distance_m: f64) -> Self {
        Self { stops, total_distance_m }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

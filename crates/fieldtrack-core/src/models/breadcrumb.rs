//! Breadcrumb and anchor types used across all fieldtrack crates.
//!
//! These types bridge the serde-facing input documents and the
//! computational `geo` crate types.

use chrono::{DateTime, Utc};
use geo::Point;
use serde::{Deserialize, Serialize};

/// A WGS 84 coordinate pair in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Convert to a `geo` point (x = longitude, y = latitude).
    pub fn to_point(self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}

/// A single observation from a mobile location tracker.
///
/// Immutable once recorded; the analyzer reads these and never writes them
/// back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,

    /// When the sample was taken.
    pub recorded_at: DateTime<Utc>,

    /// Reported sensor accuracy in meters, when the device provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f64>,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64, recorded_at: DateTime<Utc>) -> Self {
        Self { latitude, longitude, recorded_at, accuracy_m: None }
    }

    /// The sample's position without its timestamp.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A labelled anchor (shift start or shift end) that the dwell detectors
/// measure breadcrumbs against.
///
/// Anchors are supplied by the caller, derived from punch-in/punch-out GPS
/// capture or job-site address geocoding. They have no lifecycle of their
/// own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLocation {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ReferenceLocation {
    pub fn new(label: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self { label: label.into(), latitude, longitude }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

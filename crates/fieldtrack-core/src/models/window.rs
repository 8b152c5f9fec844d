use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GeoPoint, ReferenceLocation};

/// Input envelope for one shift's movement analysis.
///
/// Invariant: when `ended_at` is present the late-punch-out check is
/// attempted; when absent (shift still open) only the late-start check
/// runs. An empty breadcrumb sequence produces no findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementWindow {
    /// Punch-in time.
    pub started_at: DateTime<Utc>,

    /// Punch-out time; absent while the shift is still open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,

    /// Where the shift was expected to begin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location: Option<ReferenceLocation>,

    /// Where the shift was expected to end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<ReferenceLocation>,

    /// Breadcrumbs recorded during the shift, expected oldest-first.
    #[serde(default)]
    pub breadcrumbs: Vec<GeoPoint>,
}

impl MovementWindow {
    /// Create a window for an open shift with no anchors and no breadcrumbs.
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            ended_at: None,
            start_location: None,
            end_location: None,
            breadcrumbs: Vec::new(),
        }
    }

    pub fn ended_at(mut self, ended_at: DateTime<Utc>) -> Self {
        self.ended_at = Some(ended_at);
        self
    }

    pub fn start_location(mut self, location: ReferenceLocation) -> Self {
        self.start_location = Some(location);
        self
    }

    pub fn end_location(mut self, location: ReferenceLocation) -> Self {
        self.end_location = Some(location);
        self
    }

    pub fn breadcrumbs(mut self, breadcrumbs: Vec<GeoPoint>) -> Self {
        self.breadcrumbs = breadcrumbs;
        self
    }
}

//! Findings produced by the movement analyzer.
//!
//! Findings are reports for a human reviewer, not persisted state. The
//! caller decides whether to store or alert on them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Idle-at-origin finding: the technician clocked in, then lingered near
/// the start anchor before departing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateStartFinding {
    pub detected: bool,
    pub idle_minutes: i64,
    pub message: String,
}

impl LateStartFinding {
    pub fn new(idle_minutes: i64) -> Self {
        Self {
            detected: true,
            idle_minutes,
            message: format!(
                "Remained near the start location for {} minutes after punch-in",
                idle_minutes
            ),
        }
    }
}

/// Delayed punch-out finding: the technician reached the destination well
/// before formally ending the shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatePunchOutFinding {
    /// Inferred real arrival at the end location.
    pub arrived_at: DateTime<Utc>,
    pub delay_minutes: i64,
    pub message: String,
}

impl LatePunchOutFinding {
    pub fn new(arrived_at: DateTime<Utc>, delay_minutes: i64) -> Self {
        Self {
            arrived_at,
            delay_minutes,
            message: format!(
                "Arrived at the end location around {} but punched out {} minutes later",
                arrived_at.format("%H:%M"),
                delay_minutes
            ),
        }
    }
}

/// Combined output of both dwell checks for one movement window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_start: Option<LateStartFinding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_punch_out: Option<LatePunchOutFinding>,
}

impl AnalysisResult {
    /// A result with neither check triggered.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_findings(&self) -> bool {
        self.late_start.is_some() || self.late_punch_out.is_some()
    }
}

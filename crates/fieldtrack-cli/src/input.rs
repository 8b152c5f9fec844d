//! Input loading for the CLI: movement windows and job sites as JSON
//! documents, breadcrumbs as GPX tracks or JSON arrays.
//!
//! The analysis crates stay I/O-free; every file format the tool accepts
//! is handled here.

use chrono::{DateTime, Utc};
use fieldtrack_core::error::{FieldtrackError, Result};
use fieldtrack_core::models::{GeoPoint, JobSite, MovementWindow};
use gpx::read;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a movement window document.
pub fn load_window(path: &Path) -> Result<MovementWindow> {
    from_json_file(path, "movement window")
}

/// Load a JSON array of job sites.
pub fn load_job_sites(path: &Path) -> Result<Vec<JobSite>> {
    from_json_file(path, "job sites")
}

/// Load breadcrumbs from a GPX track or a JSON array, keyed by file
/// extension.
pub fn load_breadcrumbs(path: &Path) -> Result<Vec<GeoPoint>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "gpx" => load_gpx_breadcrumbs(path),
        "json" => from_json_file(path, "breadcrumbs"),
        other => Err(FieldtrackError::UnsupportedFormat { extension: other.to_string() }),
    }
}

/// Flatten a GPX file's track segments into time-stamped breadcrumbs.
///
/// GPX is always WGS 84, matching the analyzer's coordinate model. Points
/// without a timestamp cannot participate in dwell analysis and are
/// skipped.
fn load_gpx_breadcrumbs(path: &Path) -> Result<Vec<GeoPoint>> {
    let file = open(path)?;
    let gpx = read(BufReader::new(file)).map_err(|e| FieldtrackError::InvalidInput {
        format: "GPX".to_string(),
        reason: format!("Failed to parse GPX: {}", e),
    })?;

    let mut breadcrumbs = Vec::new();
    let mut skipped = 0usize;

    for track in &gpx.tracks {
        for segment in &track.segments {
            for waypoint in &segment.points {
                let recorded_at = match waypoint.time.and_then(|t| t.format().ok()) {
                    Some(time_str) => {
                        time_str.parse::<DateTime<Utc>>().map_err(|e| {
                            FieldtrackError::InvalidInput {
                                format: "GPX".to_string(),
                                reason: format!("Unparseable point timestamp '{}': {}", time_str, e),
                            }
                        })?
                    }
                    None => {
                        skipped += 1;
                        continue;
                    }
                };

                // GPX points are (x, y) = (longitude, latitude)
                let point = waypoint.point();
                breadcrumbs.push(GeoPoint::new(point.y(), point.x(), recorded_at));
            }
        }
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} GPX track points without timestamps", skipped);
    }

    Ok(breadcrumbs)
}

fn from_json_file<T: serde::de::DeserializeOwned>(path: &Path, format: &str) -> Result<T> {
    let file = open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| FieldtrackError::InvalidInput {
        format: format.to_string(),
        reason: e.to_string(),
    })
}

fn open(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(FieldtrackError::InputNotFound { path: path.to_path_buf() });
    }
    File::open(path).map_err(FieldtrackError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_gpx_track_as_breadcrumbs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("shift.gpx");

        let gpx_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk>
    <name>Morning Shift</name>
    <trkseg>
      <trkpt lat="47.644548" lon="-122.326897">
        <time>2026-03-02T08:00:00Z</time>
      </trkpt>
      <trkpt lat="47.644649" lon="-122.326998">
        <time>2026-03-02T08:05:00Z</time>
      </trkpt>
    </trkseg>
  </trk>
</gpx>"#;

        fs::write(&file_path, gpx_content).unwrap();

        let breadcrumbs = load_breadcrumbs(&file_path).unwrap();

        assert_eq!(breadcrumbs.len(), 2);
        assert_eq!(breadcrumbs[0].latitude, 47.644548);
        assert_eq!(breadcrumbs[0].longitude, -122.326897);
        assert_eq!(breadcrumbs[0].recorded_at, "2026-03-02T08:00:00Z".parse::<DateTime<Utc>>().unwrap());
        assert_eq!(breadcrumbs[1].recorded_at, "2026-03-02T08:05:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn test_gpx_points_without_timestamps_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("partial.gpx");

        let gpx_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk>
    <trkseg>
      <trkpt lat="47.644548" lon="-122.326897">
        <time>2026-03-02T08:00:00Z</time>
      </trkpt>
      <trkpt lat="47.644649" lon="-122.326998"/>
    </trkseg>
  </trk>
</gpx>"#;

        fs::write(&file_path, gpx_content).unwrap();

        let breadcrumbs = load_breadcrumbs(&file_path).unwrap();

        assert_eq!(breadcrumbs.len(), 1);
    }

    #[test]
    fn test_load_json_breadcrumbs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("points.json");

        let json_content = r#"[
            { "latitude": 0.0, "longitude": 0.0, "recorded_at": "2026-03-02T08:25:00Z" },
            { "latitude": 1.0, "longitude": 1.0, "recorded_at": "2026-03-02T08:26:00Z", "accuracy_m": 12.5 }
        ]"#;

        fs::write(&file_path, json_content).unwrap();

        let breadcrumbs = load_breadcrumbs(&file_path).unwrap();

        assert_eq!(breadcrumbs.len(), 2);
        assert_eq!(breadcrumbs[1].accuracy_m, Some(12.5));
    }

    #[test]
    fn test_load_window_document() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("window.json");

        let json_content = r#"{
            "started_at": "2026-03-02T08:00:00Z",
            "ended_at": "2026-03-02T16:00:00Z",
            "start_location": { "label": "office", "latitude": 0.0, "longitude": 0.0 },
            "breadcrumbs": []
        }"#;

        fs::write(&file_path, json_content).unwrap();

        let window = load_window(&file_path).unwrap();

        assert_eq!(window.started_at, "2026-03-02T08:00:00Z".parse::<DateTime<Utc>>().unwrap());
        assert!(window.ended_at.is_some());
        assert_eq!(window.start_location.unwrap().label, "office");
        assert!(window.end_location.is_none());
        assert!(window.breadcrumbs.is_empty());
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("points.csv");
        fs::write(&file_path, "lat,lon\n").unwrap();

        let result = load_breadcrumbs(&file_path);

        assert!(matches!(result, Err(FieldtrackError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = load_window(Path::new("/nonexistent/window.json"));

        assert!(matches!(result, Err(FieldtrackError::InputNotFound { .. })));
    }
}

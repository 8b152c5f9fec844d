use crate::error::{FieldtrackError, Result};
use crate::models::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the movement analyzer.
///
/// Precedence: CLI arguments > environment variables > config file >
/// defaults.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Radius around an anchor within which a breadcrumb counts as "near",
    /// in meters. The boundary is inclusive.
    pub proximity_meters: ConfigValue<f64>,

    /// Minimum dwell duration that raises a finding, in minutes.
    pub idle_minutes: ConfigValue<i64>,

    /// Fallback coordinate for job sites without a geocoded location.
    /// Deployments should set this to their dispatch depot.
    pub base_coordinate: ConfigValue<Coordinate>,
}

impl AnalyzerConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            proximity_meters: ConfigValue::new(200.0, ConfigSource::Default),
            idle_minutes: ConfigValue::new(20, ConfigSource::Default),
            base_coordinate: ConfigValue::new(Coordinate::new(0.0, 0.0), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| FieldtrackError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| FieldtrackError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        // Update values from file
        if let Some(proximity) = file_config.proximity_meters {
            if proximity <= 0.0 {
                return Err(FieldtrackError::ConfigInvalid {
                    key: "proximity_meters".to_string(),
                    reason: format!("Expected a positive radius, got {}", proximity),
                });
            }
            self.proximity_meters.update(proximity, ConfigSource::File);
        }

        if let Some(idle) = file_config.idle_minutes {
            if idle < 0 {
                return Err(FieldtrackError::ConfigInvalid {
                    key: "idle_minutes".to_string(),
                    reason: format!("Expected a non-negative threshold, got {}", idle),
                });
            }
            self.idle_minutes.update(idle, ConfigSource::File);
        }

        // The base coordinate travels as a latitude/longitude pair
        match (file_config.base_latitude, file_config.base_longitude) {
            (Some(lat), Some(lon)) => {
                self.base_coordinate.update(Coordinate::new(lat, lon), ConfigSource::File);
            }
            (None, None) => {}
            _ => {
                return Err(FieldtrackError::ConfigInvalid {
                    key: "base_latitude/base_longitude".to_string(),
                    reason: "Both must be set together".to_string(),
                });
            }
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // FIELDTRACK_PROXIMITY_METERS
        if let Ok(proximity_str) = env::var("FIELDTRACK_PROXIMITY_METERS") {
            match proximity_str.parse::<f64>() {
                Ok(proximity) if proximity > 0.0 => {
                    self.proximity_meters.update(proximity, ConfigSource::Environment)
                }
                _ => tracing::warn!(
                    "Invalid FIELDTRACK_PROXIMITY_METERS value '{}': expected a positive number of meters",
                    proximity_str
                ),
            }
        }

        // FIELDTRACK_IDLE_MINUTES
        if let Ok(idle_str) = env::var("FIELDTRACK_IDLE_MINUTES") {
            match idle_str.parse::<i64>() {
                Ok(idle) if idle >= 0 => {
                    self.idle_minutes.update(idle, ConfigSource::Environment)
                }
                _ => tracing::warn!(
                    "Invalid FIELDTRACK_IDLE_MINUTES value '{}': expected a non-negative integer",
                    idle_str
                ),
            }
        }

        // FIELDTRACK_BASE_LAT / FIELDTRACK_BASE_LON travel as a pair
        let lat = env::var("FIELDTRACK_BASE_LAT").ok();
        let lon = env::var("FIELDTRACK_BASE_LON").ok();
        match (lat, lon) {
            (Some(lat_str), Some(lon_str)) => {
                match (lat_str.parse::<f64>(), lon_str.parse::<f64>()) {
                    (Ok(lat), Ok(lon)) => self
                        .base_coordinate
                        .update(Coordinate::new(lat, lon), ConfigSource::Environment),
                    _ => tracing::warn!(
                        "Invalid FIELDTRACK_BASE_LAT/FIELDTRACK_BASE_LON values '{}'/'{}': expected decimal degrees",
                        lat_str,
                        lon_str
                    ),
                }
            }
            (None, None) => {}
            _ => tracing::warn!(
                "FIELDTRACK_BASE_LAT and FIELDTRACK_BASE_LON must be set together; ignoring"
            ),
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(proximity) = overrides.proximity_meters {
            self.proximity_meters.update(proximity, ConfigSource::Cli);
        }

        if let Some(idle) = overrides.idle_minutes {
            self.idle_minutes.update(idle, ConfigSource::Cli);
        }

        if let Some(base) = overrides.base_coordinate {
            self.base_coordinate.update(base, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "proximity_meters".to_string(),
            (format!("{}", self.proximity_meters.value), self.proximity_meters.source),
        );

        map.insert(
            "idle_minutes".to_string(),
            (format!("{}", self.idle_minutes.value), self.idle_minutes.source),
        );

        map.insert(
            "base_coordinate".to_string(),
            (
                format!(
                    "{}, {}",
                    self.base_coordinate.value.latitude, self.base_coordinate.value.longitude
                ),
                self.base_coordinate.source,
            ),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    proximity_meters: Option<f64>,
    idle_minutes: Option<i64>,
    base_latitude: Option<f64>,
    base_longitude: Option<f64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub proximity_meters: Option<f64>,
    pub idle_minutes: Option<i64>,
    pub base_coordinate: Option<Coordinate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::with_defaults();
        assert_eq!(config.proximity_meters.value, 200.0);
        assert_eq!(config.proximity_meters.source, ConfigSource::Default);
        assert_eq!(config.idle_minutes.value, 20);
        assert_eq!(config.base_coordinate.value, Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // File must not override environment
        value.update(400, ConfigSource::File);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI overrides everything
        value.update(500, ConfigSource::Cli);
        assert_eq!(value.value, 500);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
proximity_meters = 150.0
idle_minutes = 30
base_latitude = -8.5069
base_longitude = 115.2625
"#
        )
        .unwrap();

        let config = AnalyzerConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.proximity_meters.value, 150.0);
        assert_eq!(config.proximity_meters.source, ConfigSource::File);
        assert_eq!(config.idle_minutes.value, 30);
        assert_eq!(config.base_coordinate.value, Coordinate::new(-8.5069, 115.2625));
    }

    #[test]
    fn test_rejects_non_positive_proximity() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "proximity_meters = -5.0").unwrap();

        let result = AnalyzerConfig::with_defaults().load_from_file(file.path());
        assert!(matches!(result, Err(FieldtrackError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_rejects_half_specified_base_coordinate() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_latitude = -8.5").unwrap();

        let result = AnalyzerConfig::with_defaults().load_from_file(file.path());
        assert!(matches!(result, Err(FieldtrackError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = AnalyzerConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            proximity_meters: Some(75.0),
            idle_minutes: None,
            base_coordinate: Some(Coordinate::new(1.0, 2.0)),
        });

        assert_eq!(config.proximity_meters.value, 75.0);
        assert_eq!(config.proximity_meters.source, ConfigSource::Cli);
        assert_eq!(config.idle_minutes.value, 20);
        assert_eq!(config.idle_minutes.source, ConfigSource::Default);
        assert_eq!(config.base_coordinate.value, Coordinate::new(1.0, 2.0));
    }
}

//! Builds the effective analyzer configuration for a CLI invocation.

use anyhow::{Context, Result};
use fieldtrack_core::config::AnalyzerConfig;
use std::path::Path;

/// Defaults, then the optional config file, then `FIELDTRACK_*`
/// environment variables. Per-command flag overrides are applied by each
/// command on top of this.
pub fn load_config(config_file: Option<&Path>) -> Result<AnalyzerConfig> {
    let mut config = AnalyzerConfig::with_defaults();

    if let Some(path) = config_file {
        config = config
            .load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
    }

    Ok(config.load_from_env())
}

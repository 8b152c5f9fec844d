//! Analyze command implementation

use crate::cli::AnalyzeArgs;
use crate::config_loader::load_config;
use crate::input;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use fieldtrack_analysis::analyze_window;
use fieldtrack_core::config::CliConfigOverrides;
use std::path::Path;

pub fn execute(args: AnalyzeArgs, config_file: Option<&Path>, output: &OutputWriter) -> Result<()> {
    let mut config = load_config(config_file)?;
    config.update_from_cli(CliConfigOverrides {
        proximity_meters: args.proximity_meters,
        idle_minutes: args.idle_minutes,
        base_coordinate: None,
    });

    let mut window = input::load_window(&args.window).with_context(|| {
        format!("Failed to load movement window from {}", args.window.display())
    })?;

    if let Some(path) = &args.breadcrumbs {
        window.breadcrumbs = input::load_breadcrumbs(path)
            .with_context(|| format!("Failed to load breadcrumbs from {}", path.display()))?;
    }

    let result = analyze_window(&window, &config);

    if output.is_json() {
        return output.result(&result);
    }

    output.section("Movement Analysis");
    output.kv("Shift start", window.started_at.format("%Y-%m-%d %H:%M:%S UTC"));
    match window.ended_at {
        Some(ended_at) => output.kv("Shift end", ended_at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => output.kv("Shift end", "still open"),
    }
    output.kv("Breadcrumbs", window.breadcrumbs.len());

    output.section("Findings");
    match &result.late_start {
        Some(finding) => output.warning(&finding.message),
        None => output.info("No late start detected"),
    }
    match &result.late_punch_out {
        Some(finding) => output.warning(&finding.message),
        None => output.info("No delayed punch-out detected"),
    }

    Ok(())
}

//! Route command implementation

use crate::cli::RouteArgs;
use crate::config_loader::load_config;
use crate::input;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use fieldtrack_analysis::{distance_meters, order_route};
use fieldtrack_core::config::CliConfigOverrides;
use fieldtrack_core::models::Coordinate;
use std::path::Path;
use tabled::Tabled;

#[derive(Tabled)]
struct StopRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Job")]
    id: String,
    #[tabled(rename = "Scheduled")]
    scheduled_at: String,
    #[tabled(rename = "Leg (km)")]
    leg_km: String,
}

pub fn execute(args: RouteArgs, config_file: Option<&Path>, output: &OutputWriter) -> Result<()> {
    let mut config = load_config(config_file)?;
    let base_override = match (args.base_lat, args.base_lon) {
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
        _ => None,
    };
    config.update_from_cli(CliConfigOverrides {
        proximity_meters: None,
        idle_minutes: None,
        base_coordinate: base_override,
    });

    let jobs = input::load_job_sites(&args.jobs)
        .with_context(|| format!("Failed to load job sites from {}", args.jobs.display()))?;

    let base = config.base_coordinate.value;
    let route = order_route(&jobs, base);

    if output.is_json() {
        return output.result(&route);
    }

    output.section("Suggested Route");
    if route.is_empty() {
        output.info("No job sites to order");
        return Ok(());
    }

    let mut rows = Vec::with_capacity(route.len());
    let mut previous: Option<Coordinate> = None;
    for (idx, stop) in route.stops.iter().enumerate() {
        let here = stop.coordinate.unwrap_or(base);
        let leg_km = match previous {
            Some(prev) => format!("{:.1}", distance_meters(prev, here) / 1000.0),
            None => "-".to_string(),
        };
        previous = Some(here);

        rows.push(StopRow {
            position: idx + 1,
            id: stop.id.clone(),
            scheduled_at: stop.scheduled_at.format("%H:%M").to_string(),
            leg_km,
        });
    }

    output.table(rows);
    output.kv("Total distance", format!("{:.1} km", route.total_distance_m / 1000.0));
    output.info("The ordering is advisory, not a shortest-route guarantee");

    Ok(())
}

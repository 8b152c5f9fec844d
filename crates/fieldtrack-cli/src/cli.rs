use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fieldtrack - Movement analysis for field-service GPS breadcrumbs
#[derive(Parser, Debug)]
#[command(name = "fieldtrack")]
#[command(about = "Movement analysis for field-service GPS breadcrumbs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// TOML config file with analyzer thresholds
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a shift's movement window for dwell findings
    Analyze(AnalyzeArgs),

    /// Suggest a visiting order for a day's job sites
    Route(RouteArgs),

    /// Show the effective analyzer configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Path to a movement window JSON document
    pub window: PathBuf,

    /// Breadcrumb file that replaces the window's own breadcrumbs
    /// (GPX track or JSON array)
    #[arg(long, value_name = "FILE")]
    pub breadcrumbs: Option<PathBuf>,

    /// Radius around an anchor within which a breadcrumb counts as near
    #[arg(long, value_name = "METERS")]
    pub proximity_meters: Option<f64>,

    /// Minimum dwell duration that raises a finding
    #[arg(long, value_name = "MINUTES")]
    pub idle_minutes: Option<i64>,
}

#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Path to a JSON array of job sites
    pub jobs: PathBuf,

    /// Latitude of the fallback coordinate for ungeocoded jobs
    #[arg(long, value_name = "DEGREES", requires = "base_lon")]
    pub base_lat: Option<f64>,

    /// Longitude of the fallback coordinate for ungeocoded jobs
    #[arg(long, value_name = "DEGREES", requires = "base_lat")]
    pub base_lon: Option<f64>,
}

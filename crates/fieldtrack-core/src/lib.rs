//! Fieldtrack Core - Domain models, configuration, and error types
//!
//! This crate contains the shared domain types consumed by the analysis and
//! CLI crates: breadcrumbs, movement windows, findings, job sites, and the
//! layered analyzer configuration.

pub mod config;
pub mod error;
pub mod models;

pub use error::{FieldtrackError, Result};

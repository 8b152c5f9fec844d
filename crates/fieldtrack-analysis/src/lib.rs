//! Fieldtrack Analysis - Movement analysis over breadcrumb trails
//!
//! Pure, synchronous computations layered over the `fieldtrack-core`
//! models: the geodesic distance primitive, the dwell and late-punch-out
//! detectors, and the greedy route ordering. Nothing here performs I/O,
//! holds locks, or touches shared mutable state; every operation is safe
//! to invoke concurrently for different inputs.

pub mod distance;
pub mod dwell;
pub mod route;

pub use distance::distance_meters;
pub use dwell::{analyze_window, detect_late_punch_out, detect_late_start};
pub use route::order_route;

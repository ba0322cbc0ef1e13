//! Parallel evaluation over many independent polylines
//!
//! Each polyline is processed by its own pure call, so the batch shares nothing mutable
//! and the output order always matches the input order.

use crate::{CalibrationResult, LinearReference, Metric, Polyline, Result, Section};
use geo::Coord;
use rayon::prelude::*;

/// Extract the same chainage interval from every polyline in parallel
pub fn extract_sections_parallel<M: Metric + Sync>(
    engine: &LinearReference<M>,
    polylines: &[Polyline],
    start_km: f64,
    end_km: f64,
) -> Vec<Result<Section>> {
    #[cfg(feature = "profiling")]
    profiling::scope!("batch::extract_sections_parallel");

    polylines
        .par_iter()
        .map(|polyline| engine.extract_section(polyline, start_km, end_km))
        .collect()
}

/// Calibrate one query point against every polyline in parallel
pub fn calibrate_points_parallel<M: Metric + Sync>(
    engine: &LinearReference<M>,
    polylines: &[Polyline],
    query: Coord<f64>,
    radius_km: f64,
) -> Vec<Result<CalibrationResult>> {
    #[cfg(feature = "profiling")]
    profiling::scope!("batch::calibrate_points_parallel");

    polylines
        .par_iter()
        .map(|polyline| engine.calibrate_point(polyline, query, radius_km))
        .collect()
}

/// Length in km of every polyline in parallel
pub fn lengths_km_parallel<M: Metric + Sync>(
    engine: &LinearReference<M>,
    polylines: &[Polyline],
) -> Vec<f64> {
    polylines
        .par_iter()
        .map(|polyline| engine.length_km(polyline))
        .collect()
}

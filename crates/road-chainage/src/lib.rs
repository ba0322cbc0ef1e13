//! Road Chainage - Linear Referencing Along Road Polylines
//!
//! This library converts between the two ways a position along a road can be expressed:
//! a 2-D coordinate, and a *chainage*, the cumulative distance travelled along the road's
//! polyline from its first vertex. Coordinates are treated as planar decimal degrees and
//! chainages are exposed in kilometers through a fixed conversion constant
//! (1 degree = 111.32 km).
//!
//! # Architecture
//!
//! - **[`Polyline`]**: Validated, immutable single-part road geometry
//! - **[`walker`]**: Arc-length walk over segments, shared by every operation
//! - **[`extract_section`]**: Sub-polyline between two chainages
//! - **[`point_at_chainage`]**: Coordinate at a chainage
//! - **[`calibrate_point`]**: Nearest vertex to a query point, with its chainage
//! - **[`LinearReference`]**: Engine bundling a [`Config`] and a [`Metric`]
//!
//! Every operation is a pure function over caller-owned data. Failures are returned as
//! [`ChainageError`] values and nothing is retained between calls, so independent polylines
//! can be processed in parallel (see [`batch`]).

mod calibrate;
mod config;
mod engine;
mod locate;
mod polyline;
mod section;

pub mod batch;
pub mod metric;
#[cfg(feature = "serde")]
pub mod record;
pub mod units;
pub mod walker;

// Public API exports
pub use calibrate::CalibrationResult;
pub use config::Config;
pub use engine::LinearReference;
pub use metric::{Metric, Planar};
pub use polyline::Polyline;
pub use section::Section;

use geo::Coord;

/// Error types for linear referencing operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChainageError {
    /// Malformed polyline, non-finite argument, or an empty chainage interval
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested chainage lies outside the measured polyline
    #[error("Chainage {requested_km} km is outside the polyline (length {length_km} km)")]
    OutOfRange { requested_km: f64, length_km: f64 },

    /// No polyline vertex lies within the search radius
    #[error("No vertex within {radius_km} km of the query point")]
    NotFound { radius_km: f64 },
}

pub type Result<T> = std::result::Result<T, ChainageError>;

/// Extract the section between two chainages (km) using the default planar engine.
pub fn extract_section(polyline: &Polyline, start_km: f64, end_km: f64) -> Result<Section> {
    LinearReference::planar().extract_section(polyline, start_km, end_km)
}

/// Find the coordinate at a chainage (km) using the default planar engine.
pub fn point_at_chainage(polyline: &Polyline, chainage_km: f64) -> Result<Coord<f64>> {
    LinearReference::planar().point_at_chainage(polyline, chainage_km)
}

/// Snap a query point to the nearest vertex within `radius_km` using the default planar engine.
pub fn calibrate_point(
    polyline: &Polyline,
    query: Coord<f64>,
    radius_km: f64,
) -> Result<CalibrationResult> {
    LinearReference::planar().calibrate_point(polyline, query, radius_km)
}

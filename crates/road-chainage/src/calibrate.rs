//! Point calibration against polyline vertices

use crate::{ChainageError, Config, Metric, Polyline, Result, units};
use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The polyline vertex nearest to a query point, with its chainage
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalibrationResult {
    /// Arc length from vertex 0 to the matched vertex, in km
    pub chainage_km: f64,
    /// Coordinate of the matched vertex
    pub coordinate: Coord<f64>,
    /// Index of the matched vertex
    pub vertex_index: usize,
}

/// Best vertex seen so far during the scan
struct Candidate {
    distance: f64,
    index: usize,
    coordinate: Coord<f64>,
    arc_length: f64,
}

/// Snap `query` to the nearest vertex within `radius_km`
///
/// Only vertices are candidates, so a query closest to a segment interior still snaps to a
/// segment end. Every vertex is scanned and the first strict minimum is kept, so ties go to
/// the lowest index.
pub(crate) fn calibrate<M: Metric + ?Sized>(
    polyline: &Polyline,
    query: Coord<f64>,
    radius_km: f64,
    metric: &M,
    config: &Config,
) -> Result<CalibrationResult> {
    #[cfg(feature = "profiling")]
    profiling::scope!("calibrate::calibrate");

    if !query.x.is_finite() || !query.y.is_finite() {
        return Err(ChainageError::InvalidInput(format!(
            "query point is not finite: ({}, {})",
            query.x, query.y
        )));
    }
    if !units::is_valid_distance(radius_km) {
        return Err(ChainageError::InvalidInput(format!(
            "radius must be finite and non-negative, got {radius_km}"
        )));
    }

    let coords = polyline.coords();
    let Some(&first) = coords.first() else {
        return Err(ChainageError::InvalidInput(
            "polyline has no vertices".to_string(),
        ));
    };

    let radius = config.km_to_native(radius_km);
    let mut best: Option<Candidate> = None;
    let mut previous = first;
    let mut arc_length = 0.0;

    for (index, &vertex) in coords.iter().enumerate() {
        let distance = metric.distance(query, vertex);
        arc_length += metric.distance(previous, vertex);
        previous = vertex;

        if distance > radius {
            continue;
        }
        if best.as_ref().is_none_or(|b| distance < b.distance) {
            tracing::trace!(index, distance, "New nearest vertex");
            best = Some(Candidate {
                distance,
                index,
                coordinate: vertex,
                arc_length,
            });
        }
    }

    let best = best.ok_or(ChainageError::NotFound { radius_km })?;

    Ok(CalibrationResult {
        chainage_km: config.native_to_km(best.arc_length),
        coordinate: best.coordinate,
        vertex_index: best.index,
    })
}

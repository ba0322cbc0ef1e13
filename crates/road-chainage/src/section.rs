//! Section extraction between two chainages

use crate::walker::Walker;
use crate::{ChainageError, Config, Metric, Polyline, Result, locate, units};
use geo::{Coord, LineString};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The portion of a polyline between two chainages
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Section {
    /// Start chainage in km
    pub start_chainage_km: f64,
    /// End chainage in km
    pub end_chainage_km: f64,
    /// Interpolated coordinate at the start chainage
    pub start: Coord<f64>,
    /// Interpolated coordinate at the end chainage
    pub end: Coord<f64>,
    /// `end_chainage_km - start_chainage_km`
    pub length_km: f64,
    /// Sub-polyline from `start` through the source vertices in between to `end`
    pub geometry: Polyline,
}

/// Extract the sub-polyline between `start_km` and `end_km`
///
/// The start and end coordinates are interpolated inside the first segments whose
/// cumulative length reaches each chainage. Source vertices whose cumulative length
/// does not exceed the end chainage are kept in between. The length is the difference of
/// the two chainages, not a re-measurement of the extracted geometry.
pub(crate) fn extract<M: Metric + ?Sized>(
    polyline: &Polyline,
    start_km: f64,
    end_km: f64,
    metric: &M,
    config: &Config,
) -> Result<Section> {
    #[cfg(feature = "profiling")]
    profiling::scope!("section::extract");

    if !units::is_valid_distance(start_km) || !units::is_valid_distance(end_km) {
        return Err(ChainageError::InvalidInput(format!(
            "chainages must be finite and non-negative, got {start_km} and {end_km}"
        )));
    }
    if start_km >= end_km {
        return Err(ChainageError::InvalidInput(format!(
            "start chainage {start_km} km must be less than end chainage {end_km} km"
        )));
    }

    let total = metric.total_length(polyline.coords());
    let start_chainage = locate::native_target(start_km, total, config)?;
    let end_chainage = locate::native_target(end_km, total, config)?;

    let mut points: Vec<Coord<f64>> = Vec::with_capacity(2);
    let mut start: Option<Coord<f64>> = None;
    let mut end: Option<Coord<f64>> = None;

    for step in Walker::new(polyline.coords(), metric) {
        if start.is_none() && step.cumulative >= start_chainage {
            let coord = step.point_at(start_chainage);
            tracing::trace!(segment = step.index, x = coord.x, y = coord.y, "Start located");
            points.push(coord);
            start = Some(coord);
        }

        if start.is_some() && step.cumulative <= end_chainage {
            points.push(step.end);
        }

        if step.cumulative >= end_chainage {
            let coord = step.point_at(end_chainage);
            tracing::trace!(segment = step.index, x = coord.x, y = coord.y, "End located");
            points.push(coord);
            end = Some(coord);
            break;
        }
    }

    let (Some(start), Some(end)) = (start, end) else {
        let requested_km = if start.is_none() { start_km } else { end_km };
        return Err(ChainageError::OutOfRange {
            requested_km,
            length_km: config.native_to_km(total),
        });
    };

    // Sub-resolution intervals can collapse every point onto one coordinate
    let geometry = Polyline::new(LineString::new(points)).map_err(|_| {
        ChainageError::InvalidInput(format!(
            "section {start_km}..{end_km} km is narrower than the coordinate resolution"
        ))
    })?;

    let start_chainage_km = config.native_to_km(start_chainage);
    let end_chainage_km = config.native_to_km(end_chainage);

    tracing::debug!(
        start_chainage_km,
        end_chainage_km,
        vertices = geometry.num_vertices(),
        "Section extracted"
    );

    Ok(Section {
        start_chainage_km,
        end_chainage_km,
        start,
        end,
        length_km: end_chainage_km - start_chainage_km,
        geometry,
    })
}

//! GPX decoding into the engine's polyline model

use crate::error::CliError;
use geo::{Coord, LineString, MultiLineString};
use road_chainage::Polyline;
use std::io::{BufReader, Read};
use std::path::Path;

/// Gather every non-empty track segment, then every non-empty route, as line parts
pub fn gpx_to_multi_line_string(gpx: &gpx::Gpx) -> MultiLineString<f64> {
    let track_parts = gpx
        .tracks
        .iter()
        .flat_map(|track| &track.segments)
        .map(|segment| &segment.points);
    let route_parts = gpx.routes.iter().map(|route| &route.points);

    let parts: Vec<LineString<f64>> = track_parts
        .chain(route_parts)
        .filter(|points| !points.is_empty())
        .map(|points| {
            let coords: Vec<Coord<f64>> = points.iter().map(|wp| wp.point().0).collect();
            LineString::new(coords)
        })
        .collect();

    MultiLineString::new(parts)
}

/// Decode a GPX document and reduce it to its first part
pub fn read_polyline<R: Read>(reader: R) -> Result<Polyline, CliError> {
    let gpx = gpx::read(reader)?;
    let multi = gpx_to_multi_line_string(&gpx);
    tracing::debug!(parts = multi.0.len(), "Decoded GPX geometry");
    Ok(Polyline::from_multi_line_string(&multi)?)
}

/// Load the road polyline from a GPX file
pub fn load_polyline(path: &Path) -> Result<Polyline, CliError> {
    let file = std::fs::File::open(path)?;
    let polyline = read_polyline(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        vertices = polyline.num_vertices(),
        "Loaded road"
    );
    Ok(polyline)
}

/// Two-segment track used by tests across the crate
#[cfg(test)]
pub(crate) const TWO_SEGMENTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="road-chainage-tests" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <name>Road</name>
    <trkseg>
      <trkpt lat="40.0" lon="-3.0"></trkpt>
      <trkpt lat="40.0" lon="-2.9"></trkpt>
      <trkpt lat="40.1" lon="-2.9"></trkpt>
    </trkseg>
    <trkseg>
      <trkpt lat="41.0" lon="-3.0"></trkpt>
      <trkpt lat="41.0" lon="-2.0"></trkpt>
    </trkseg>
  </trk>
</gpx>"#;

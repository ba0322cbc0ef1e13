//! Polyline storage and validation module
//!
//! This module provides the `Polyline` struct, the single-part road geometry that every
//! linear-referencing operation walks. Validation happens once at construction so the
//! algorithms can rely on at least two finite vertices and a positive length.

use crate::{ChainageError, Result};
use geo::{Coord, LineString, MultiLineString};

/// An open, single-part polyline with at least two finite vertices
///
/// Coordinates are `(x, y)` = (longitude, latitude) in decimal degrees.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LineString<f64>", into = "LineString<f64>")
)]
pub struct Polyline {
    line: LineString<f64>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Polyline {
    /// Create a new Polyline from a line string
    ///
    /// # Returns
    /// The polyline on success, or [`ChainageError::InvalidInput`] if the line has fewer
    /// than two vertices, contains a non-finite coordinate, or has all vertices identical
    pub fn new(line: LineString<f64>) -> Result<Self> {
        Self::validate(&line.0)?;
        Ok(Self { line })
    }

    /// Create a new Polyline from `(x, y)` tuples
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let coords: Vec<Coord<f64>> = points.into_iter().map(|(x, y)| Coord { x, y }).collect();
        Self::new(LineString::new(coords))
    }

    /// Reduce a multi-part geometry to its first part
    ///
    /// Hosts that receive multi-line road geometries use this to obtain the single part
    /// the engine operates on. An empty collection is rejected.
    pub fn from_multi_line_string(multi: &MultiLineString<f64>) -> Result<Self> {
        let first = multi.0.first().ok_or_else(|| {
            ChainageError::InvalidInput("multi-line geometry has no parts".to_string())
        })?;
        if multi.0.len() > 1 {
            tracing::debug!(
                parts = multi.0.len(),
                "Using the first part of a multi-line geometry"
            );
        }
        Self::new(first.clone())
    }

    fn validate(coords: &[Coord<f64>]) -> Result<()> {
        match coords.len() {
            0 => {
                return Err(ChainageError::InvalidInput(
                    "polyline has no vertices".to_string(),
                ));
            }
            1 => {
                return Err(ChainageError::InvalidInput(
                    "polyline needs at least two vertices".to_string(),
                ));
            }
            _ => {}
        }

        if let Some((index, coord)) = coords
            .iter()
            .enumerate()
            .find(|(_, c)| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(ChainageError::InvalidInput(format!(
                "vertex {index} is not finite: ({}, {})",
                coord.x, coord.y
            )));
        }

        let first = coords[0];
        if coords.iter().all(|c| *c == first) {
            return Err(ChainageError::InvalidInput(
                "polyline vertices are all identical".to_string(),
            ));
        }

        Ok(())
    }

    /// All vertices in order
    #[inline]
    pub fn coords(&self) -> &[Coord<f64>] {
        &self.line.0
    }

    /// The underlying line string
    #[inline]
    pub fn line_string(&self) -> &LineString<f64> {
        &self.line
    }

    /// Consume the polyline and return the owned line string
    #[inline]
    pub fn into_line_string(self) -> LineString<f64> {
        self.line
    }

    /// Number of vertices (always at least two)
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.line.0.len()
    }

    /// First vertex
    #[inline]
    pub fn first(&self) -> Coord<f64> {
        self.line.0[0]
    }

    /// Last vertex
    #[inline]
    pub fn last(&self) -> Coord<f64> {
        self.line.0[self.line.0.len() - 1]
    }
}

impl TryFrom<LineString<f64>> for Polyline {
    type Error = ChainageError;

    fn try_from(line: LineString<f64>) -> Result<Self> {
        Self::new(line)
    }
}

impl TryFrom<Vec<Coord<f64>>> for Polyline {
    type Error = ChainageError;

    fn try_from(coords: Vec<Coord<f64>>) -> Result<Self> {
        Self::new(LineString::new(coords))
    }
}

impl From<Polyline> for LineString<f64> {
    fn from(polyline: Polyline) -> Self {
        polyline.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_creation() {
        let polyline = Polyline::from_points([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).unwrap();
        assert_eq!(polyline.num_vertices(), 3);
        assert_eq!(polyline.first(), Coord { x: 0.0, y: 0.0 });
        assert_eq!(polyline.last(), Coord { x: 1.0, y: 1.0 });
    }

    #[test]
    fn test_zero_part_polyline_fails() {
        let result = Polyline::new(LineString::new(vec![]));
        assert!(matches!(result, Err(ChainageError::InvalidInput(_))));
    }

    #[test]
    fn test_single_vertex_fails() {
        let result = Polyline::from_points([(1.0, 2.0)]);
        assert!(matches!(result, Err(ChainageError::InvalidInput(_))));
    }

    #[test]
    fn test_non_finite_vertex_fails() {
        let result = Polyline::from_points([(0.0, 0.0), (f64::NAN, 1.0)]);
        match result {
            Err(ChainageError::InvalidInput(msg)) => assert!(msg.contains("vertex 1")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        let result = Polyline::from_points([(0.0, f64::INFINITY), (1.0, 1.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_degenerate_polyline_fails() {
        let result = Polyline::from_points([(2.0, 2.0), (2.0, 2.0), (2.0, 2.0)]);
        assert!(matches!(result, Err(ChainageError::InvalidInput(_))));
    }

    #[test]
    fn test_repeated_vertices_are_allowed() {
        let polyline = Polyline::from_points([(0.0, 0.0), (0.0, 0.0), (1.0, 0.0)]).unwrap();
        assert_eq!(polyline.num_vertices(), 3);
    }

    #[test]
    fn test_from_multi_line_string_takes_first_part() {
        let multi = MultiLineString::new(vec![
            LineString::from(vec![(0.0, 0.0), (1.0, 0.0)]),
            LineString::from(vec![(5.0, 5.0), (6.0, 6.0)]),
        ]);
        let polyline = Polyline::from_multi_line_string(&multi).unwrap();
        assert_eq!(polyline.coords(), &[Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 }]);
    }

    #[test]
    fn test_from_empty_multi_line_string_fails() {
        let multi: MultiLineString<f64> = MultiLineString::new(vec![]);
        let result = Polyline::from_multi_line_string(&multi);
        assert!(matches!(result, Err(ChainageError::InvalidInput(_))));
    }

    #[test]
    fn test_conversions() {
        let line = LineString::from(vec![(0.0, 0.0), (2.0, 0.0)]);
        let polyline = Polyline::try_from(line.clone()).unwrap();
        assert_eq!(polyline.line_string(), &line);

        let back: LineString<f64> = polyline.clone().into();
        assert_eq!(back, line);
        assert_eq!(polyline.into_line_string(), line);

        let from_coords = Polyline::try_from(vec![Coord { x: 0.0, y: 0.0 }]);
        assert!(from_coords.is_err());
    }
}

//! Geometry primitives used by every linear-referencing operation
//!
//! The algorithms only need three capabilities from a geometry backend: the distance
//! between two coordinates, the total length of a coordinate sequence, and the coordinate
//! at a given arc length. [`Metric`] captures them so a backend can be swapped without
//! touching the algorithms. [`Planar`] is the default, built on `geo`'s Euclidean metric.

use crate::walker::{self, Walker};
use geo::{Coord, Distance, Euclidean, Point};

/// Distance capability over native (degree) coordinates
pub trait Metric {
    /// Distance between two coordinates in native units
    fn distance(&self, a: Coord<f64>, b: Coord<f64>) -> f64;

    /// Sum of segment lengths of a coordinate sequence
    fn total_length(&self, coords: &[Coord<f64>]) -> f64 {
        Walker::new(coords, self)
            .last()
            .map_or(0.0, |step| step.cumulative)
    }

    /// Coordinate at arc length `distance` from the first vertex
    ///
    /// Returns `None` when `distance` is negative or exceeds the total length.
    fn interpolate_at(&self, coords: &[Coord<f64>], distance: f64) -> Option<Coord<f64>> {
        walker::interpolate_at(coords, self, distance)
    }
}

/// Planar Euclidean metric
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Planar;

impl Metric for Planar {
    #[inline]
    fn distance(&self, a: Coord<f64>, b: Coord<f64>) -> f64 {
        Euclidean.distance(Point::from(a), Point::from(b))
    }
}

impl<M: Metric + ?Sized> Metric for &M {
    #[inline]
    fn distance(&self, a: Coord<f64>, b: Coord<f64>) -> f64 {
        (**self).distance(a, b)
    }

    fn total_length(&self, coords: &[Coord<f64>]) -> f64 {
        (**self).total_length(coords)
    }

    fn interpolate_at(&self, coords: &[Coord<f64>], distance: f64) -> Option<Coord<f64>> {
        (**self).interpolate_at(coords, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Manhattan distance, to check that algorithms go through the trait
    struct Taxicab;

    impl Metric for Taxicab {
        fn distance(&self, a: Coord<f64>, b: Coord<f64>) -> f64 {
            (a.x - b.x).abs() + (a.y - b.y).abs()
        }
    }

    fn square_path() -> Vec<Coord<f64>> {
        vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 3.0, y: 4.0 },
            Coord { x: 6.0, y: 8.0 },
        ]
    }

    #[test]
    fn test_planar_distance() {
        let d = Planar.distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_planar_total_length() {
        assert!((Planar.total_length(&square_path()) - 10.0).abs() < 1e-12);
        assert_eq!(Planar.total_length(&square_path()[..1]), 0.0);
    }

    #[test]
    fn test_custom_metric_total_length() {
        assert!((Taxicab.total_length(&square_path()) - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_custom_metric_interpolation() {
        // Under the taxicab metric the first segment is 7 units long
        let point = Taxicab.interpolate_at(&square_path(), 3.5).unwrap();
        assert!((point.x - 1.5).abs() < 1e-12);
        assert!((point.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_reference_forwards() {
        let metric = &Planar;
        assert!((metric.total_length(&square_path()) - 10.0).abs() < 1e-12);
        assert_eq!(
            metric.interpolate_at(&square_path(), 5.0),
            Some(Coord { x: 3.0, y: 4.0 })
        );
    }
}

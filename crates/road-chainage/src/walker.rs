//! Arc-length walk over polyline segments
//!
//! The walker visits consecutive vertex pairs `(v[i-1], v[i])` and reports each segment's
//! length together with the cumulative length through the end of that segment. Locating
//! the segment that contains a target distance and interpolating inside it is shared by
//! section extraction and point lookup, which keeps both operations in exact agreement.

use crate::Metric;
use geo::Coord;

/// One segment of a walk, in native units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// Index of the segment's far vertex (1..N-1)
    pub index: usize,
    /// Near vertex `v[index - 1]`
    pub start: Coord<f64>,
    /// Far vertex `v[index]`
    pub end: Coord<f64>,
    /// Length of this segment
    pub length: f64,
    /// Cumulative length from vertex 0 through `end`
    pub cumulative: f64,
}

impl Step {
    /// Cumulative length from vertex 0 up to `start`
    #[inline]
    pub fn distance_before(&self) -> f64 {
        self.cumulative - self.length
    }

    /// Fraction of this segment at which the cumulative distance equals `target`
    ///
    /// Zero-length segments yield 0. The result is clamped to `[0, 1]`.
    #[inline]
    pub fn fraction_at(&self, target: f64) -> f64 {
        if self.length > 0.0 {
            ((target - self.distance_before()) / self.length).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Coordinate at cumulative distance `target` within this segment
    ///
    /// A target at or past `cumulative` is the far vertex itself.
    #[inline]
    pub fn point_at(&self, target: f64) -> Coord<f64> {
        if target >= self.cumulative {
            return self.end;
        }
        interpolate(self.start, self.end, self.fraction_at(target))
    }
}

/// Iterator of [`Step`]s over a coordinate sequence
///
/// Yields nothing for sequences with fewer than two vertices.
#[derive(Debug, Clone)]
pub struct Walker<'a, M: ?Sized> {
    coords: &'a [Coord<f64>],
    metric: &'a M,
    next: usize,
    cumulative: f64,
}

impl<'a, M: Metric + ?Sized> Walker<'a, M> {
    pub fn new(coords: &'a [Coord<f64>], metric: &'a M) -> Self {
        Self {
            coords,
            metric,
            next: 1,
            cumulative: 0.0,
        }
    }
}

impl<M: Metric + ?Sized> Iterator for Walker<'_, M> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let end = *self.coords.get(self.next)?;
        let start = self.coords[self.next - 1];
        let length = self.metric.distance(start, end);
        self.cumulative += length;

        let step = Step {
            index: self.next,
            start,
            end,
            length,
            cumulative: self.cumulative,
        };
        self.next += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.coords.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

/// Find the first segment whose cumulative distance reaches or exceeds `target`
///
/// Returns `None` when the walk is exhausted first, i.e. `target` lies beyond the
/// polyline's total length.
pub fn locate<M: Metric + ?Sized>(coords: &[Coord<f64>], metric: &M, target: f64) -> Option<Step> {
    Walker::new(coords, metric).find(|step| step.cumulative >= target)
}

/// Linear interpolation `a + f * (b - a)`, componentwise
#[inline(always)]
pub fn interpolate(a: Coord<f64>, b: Coord<f64>, f: f64) -> Coord<f64> {
    Coord {
        x: a.x + f * (b.x - a.x),
        y: a.y + f * (b.y - a.y),
    }
}

/// Coordinate at arc-length `distance` from vertex 0
///
/// Returns `None` for a negative or non-finite distance, or one beyond the total length.
pub fn interpolate_at<M: Metric + ?Sized>(
    coords: &[Coord<f64>],
    metric: &M,
    distance: f64,
) -> Option<Coord<f64>> {
    if !distance.is_finite() || distance < 0.0 {
        return None;
    }
    locate(coords, metric, distance).map(|step| step.point_at(distance))
}

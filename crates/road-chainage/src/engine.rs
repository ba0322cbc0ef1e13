//! LinearReference - Top-level engine for chainage operations
//!
//! This module bundles a [`Config`] with a [`Metric`] so hosts can build one engine and
//! run any number of independent operations through it. The engine holds no per-call
//! state; every method only reads its arguments.

use crate::{
    CalibrationResult, Config, Metric, Planar, Polyline, Result, Section, calibrate, locate,
    section,
};
use geo::Coord;

/// Linear-referencing engine over a geometry metric
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearReference<M = Planar> {
    /// Unit conversion settings
    config: Config,
    /// Geometry primitives used by every walk
    metric: M,
}

impl LinearReference<Planar> {
    /// Create a planar engine with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        Self::with_metric(config, Planar)
    }

    /// Planar engine with the default configuration
    pub fn planar() -> Self {
        Self {
            config: Config::default(),
            metric: Planar,
        }
    }
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl<M: Metric> LinearReference<M> {
    /// Create an engine with a custom metric
    pub fn with_metric(config: Config, metric: M) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, metric })
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a reference to the metric
    #[inline]
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Total polyline length in km
    pub fn length_km(&self, polyline: &Polyline) -> f64 {
        self.config
            .native_to_km(self.metric.total_length(polyline.coords()))
    }

    /// Extract the section between `start_km` and `end_km`
    ///
    /// # Errors
    /// * [`ChainageError::InvalidInput`](crate::ChainageError::InvalidInput) if either
    ///   chainage is negative or non-finite, or `start_km >= end_km`
    /// * [`ChainageError::OutOfRange`](crate::ChainageError::OutOfRange) if the polyline
    ///   ends before the requested chainage
    pub fn extract_section(
        &self,
        polyline: &Polyline,
        start_km: f64,
        end_km: f64,
    ) -> Result<Section> {
        section::extract(polyline, start_km, end_km, &self.metric, &self.config)
    }

    /// Coordinate at `chainage_km`
    ///
    /// # Errors
    /// * [`ChainageError::InvalidInput`](crate::ChainageError::InvalidInput) if the
    ///   chainage is negative or non-finite
    /// * [`ChainageError::OutOfRange`](crate::ChainageError::OutOfRange) if it exceeds the
    ///   polyline length
    pub fn point_at_chainage(&self, polyline: &Polyline, chainage_km: f64) -> Result<Coord<f64>> {
        locate::point_at(polyline, chainage_km, &self.metric, &self.config)
    }

    /// Snap `query` to the nearest vertex within `radius_km`
    ///
    /// # Errors
    /// * [`ChainageError::InvalidInput`](crate::ChainageError::InvalidInput) for a
    ///   non-finite query or a negative or non-finite radius
    /// * [`ChainageError::NotFound`](crate::ChainageError::NotFound) if no vertex lies
    ///   within the radius
    pub fn calibrate_point(
        &self,
        polyline: &Polyline,
        query: Coord<f64>,
        radius_km: f64,
    ) -> Result<CalibrationResult> {
        calibrate::calibrate(polyline, query, radius_km, &self.metric, &self.config)
    }
}

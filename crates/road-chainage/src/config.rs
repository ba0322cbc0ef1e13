//! Engine configuration

use crate::{ChainageError, Result, units};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the linear-referencing engine
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Meters per degree used to convert between kilometers and native coordinates.
    /// Every chainage produced by an engine uses the same constant as its inputs.
    /// Default: 111 320 (1 degree = 111.32 km)
    pub meters_per_degree: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            meters_per_degree: units::METERS_PER_DEGREE,
        }
    }
}

impl Config {
    /// Reject non-finite or non-positive conversion constants
    pub fn validate(&self) -> Result<()> {
        if !self.meters_per_degree.is_finite() || self.meters_per_degree <= 0.0 {
            return Err(ChainageError::InvalidInput(format!(
                "meters per degree must be finite and positive, got {}",
                self.meters_per_degree
            )));
        }
        Ok(())
    }

    /// Kilometers to native units
    #[inline]
    pub fn km_to_native(&self, km: f64) -> f64 {
        units::km_to_native(km, self.meters_per_degree)
    }

    /// Native units to kilometers
    #[inline]
    pub fn native_to_km(&self, native: f64) -> f64 {
        units::native_to_km(native, self.meters_per_degree)
    }
}

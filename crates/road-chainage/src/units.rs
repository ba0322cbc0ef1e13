//! Unit conversions between native polyline units (planar degrees) and kilometers

/// Meters per degree of arc used for every conversion (1 degree = 111.32 km)
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Meters per kilometer
const METERS_PER_KM: f64 = 1000.0;

/// Convert a distance in kilometers to native units
///
/// # Arguments
/// * `km` - Distance in kilometers
/// * `meters_per_degree` - Conversion constant, normally [`METERS_PER_DEGREE`]
#[inline(always)]
pub fn km_to_native(km: f64, meters_per_degree: f64) -> f64 {
    (km * METERS_PER_KM) / meters_per_degree
}

/// Convert a distance in native units to kilometers
#[inline(always)]
pub fn native_to_km(native: f64, meters_per_degree: f64) -> f64 {
    (native * meters_per_degree) / METERS_PER_KM
}

/// Check that a value is a finite, non-negative distance
#[inline(always)]
pub fn is_valid_distance(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

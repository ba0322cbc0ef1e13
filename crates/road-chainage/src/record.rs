//! Result records with the field names and precision of the legacy road chainage output
//!
//! Hosts that need drop-in compatible output serialize these instead of [`Section`] and
//! [`CalibrationResult`]. Chainages and lengths are rounded to 6 decimals, coordinates to 8.
//! `lat` is the coordinate's `y` and `lon` its `x`.

use crate::{CalibrationResult, Section};
use geo::Coord;
use serde::{Deserialize, Serialize};

/// Decimals kept for chainages and lengths
pub const CHAINAGE_DECIMALS: i32 = 6;

/// Decimals kept for coordinates
pub const COORDINATE_DECIMALS: i32 = 8;

/// Serialized form of a [`Section`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub start_ch: f64,
    pub end_ch: f64,
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
    pub length: f64,
    /// Sub-polyline vertices as `[lon, lat]`
    pub geometry: Vec<[f64; 2]>,
}

/// Serialized form of a [`CalibrationResult`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationRecord {
    pub chainage: f64,
    pub lat: f64,
    pub lon: f64,
    pub index: usize,
}

/// Serialized form of a coordinate returned by a point lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub lat: f64,
    pub lon: f64,
}

/// Serialized form of a polyline length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthRecord {
    pub length: f64,
}

impl LengthRecord {
    /// Record for a length in km
    pub fn from_km(length_km: f64) -> Self {
        Self {
            length: chainage(length_km),
        }
    }
}

#[inline]
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[inline]
fn chainage(value: f64) -> f64 {
    round_to(value, CHAINAGE_DECIMALS)
}

#[inline]
fn coordinate(value: f64) -> f64 {
    round_to(value, COORDINATE_DECIMALS)
}

impl From<&Section> for SectionRecord {
    fn from(section: &Section) -> Self {
        Self {
            start_ch: chainage(section.start_chainage_km),
            end_ch: chainage(section.end_chainage_km),
            start_lat: coordinate(section.start.y),
            start_lon: coordinate(section.start.x),
            end_lat: coordinate(section.end.y),
            end_lon: coordinate(section.end.x),
            length: chainage(section.length_km),
            geometry: section
                .geometry
                .coords()
                .iter()
                .map(|c| [coordinate(c.x), coordinate(c.y)])
                .collect(),
        }
    }
}

impl From<&CalibrationResult> for CalibrationRecord {
    fn from(result: &CalibrationResult) -> Self {
        Self {
            chainage: chainage(result.chainage_km),
            lat: coordinate(result.coordinate.y),
            lon: coordinate(result.coordinate.x),
            index: result.vertex_index,
        }
    }
}

impl From<Coord<f64>> for PointRecord {
    fn from(coord: Coord<f64>) -> Self {
        Self {
            lat: coordinate(coord.y),
            lon: coordinate(coord.x),
        }
    }
}

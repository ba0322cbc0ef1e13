//! Command execution and result encoding

use crate::error::CliError;
use crate::input;
use crate::settings::{Command, Settings};
use geo::Coord;
use road_chainage::record::{CalibrationRecord, LengthRecord, PointRecord, SectionRecord};
use road_chainage::{ChainageError, LinearReference, Polyline};
use serde::Serialize;

/// JSON-encodable result of one command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Section(SectionRecord),
    Point(PointRecord),
    /// `None` when no vertex lies within the radius
    Calibration(Option<CalibrationRecord>),
    Length(LengthRecord),
}

/// Run a command against an already decoded road
///
/// A calibration without a match is a normal, empty result. Every other engine failure
/// is returned as an error.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn execute(
    command: &Command,
    engine: &LinearReference,
    road: &Polyline,
) -> Result<Output, ChainageError> {
    match *command {
        Command::Section { start, end } => {
            let section = engine.extract_section(road, start, end)?;
            Ok(Output::Section(SectionRecord::from(&section)))
        }
        Command::Point { chainage } => {
            let point = engine.point_at_chainage(road, chainage)?;
            Ok(Output::Point(PointRecord::from(point)))
        }
        Command::Calibrate { lon, lat, radius } => {
            match engine.calibrate_point(road, Coord { x: lon, y: lat }, radius) {
                Ok(result) => Ok(Output::Calibration(Some(CalibrationRecord::from(&result)))),
                Err(ChainageError::NotFound { radius_km }) => {
                    tracing::info!(radius_km, "No road vertex within radius");
                    Ok(Output::Calibration(None))
                }
                Err(err) => Err(err),
            }
        }
        Command::Length => Ok(Output::Length(LengthRecord::from_km(engine.length_km(road)))),
    }
}

/// Load the road named by the settings and run its command
pub fn run(settings: &Settings) -> Result<Output, CliError> {
    let engine = LinearReference::new(settings.config())?;
    let road = input::load_polyline(&settings.gpx)?;
    Ok(execute(&settings.command, &engine, &road)?)
}

/// Pretty JSON for an output
pub fn encode(output: &Output) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(output)?)
}

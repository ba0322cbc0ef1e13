use clap::{Parser, Subcommand};
use road_chainage::{Config, units};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Road Chainage - Sections, points and calibration along a GPX road track
pub struct Settings {
    /// GPX file holding the road; its first non-empty track segment is used
    #[clap(short, long, value_name = "FILE")]
    pub gpx: PathBuf,

    /// Meters per degree used for km conversions
    #[clap(long, default_value_t = units::METERS_PER_DEGREE)]
    pub meters_per_degree: f64,

    /// Log debug output to stderr
    #[clap(short, long, default_value = "false")]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Extract the road section between two chainages
    Section {
        /// Start chainage in km
        #[clap(long, allow_negative_numbers = true)]
        start: f64,
        /// End chainage in km
        #[clap(long, allow_negative_numbers = true)]
        end: f64,
    },
    /// Coordinate at a chainage
    Point {
        /// Chainage in km
        #[clap(long, allow_negative_numbers = true)]
        chainage: f64,
    },
    /// Snap a point to the nearest road vertex and report its chainage
    Calibrate {
        /// Query longitude in degrees
        #[clap(long, allow_negative_numbers = true)]
        lon: f64,
        /// Query latitude in degrees
        #[clap(long, allow_negative_numbers = true)]
        lat: f64,
        /// Search radius in km
        #[clap(long, default_value = "0.1")]
        radius: f64,
    },
    /// Total road length in km
    Length,
}

impl Settings {
    /// Parse settings from the command line, exiting with usage on error
    pub fn from_cli() -> Self {
        Settings::parse()
    }

    /// Engine configuration derived from the settings
    pub fn config(&self) -> Config {
        Config {
            meters_per_degree: self.meters_per_degree,
        }
    }
}

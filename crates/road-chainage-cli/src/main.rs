//! Road Chainage - command-line host
//!
//! Loads a road from a GPX file, runs one engine operation and prints the JSON result on
//! stdout. Calibrations without a match print `null`; every other failure exits non-zero.

mod commands;
mod error;
mod input;
mod logging;
mod settings;

use settings::Settings;
use std::process::ExitCode;

fn main() -> ExitCode {
    let settings = Settings::from_cli();
    logging::setup_logging(settings.verbose);
    tracing::debug!(?settings, "Parsed settings");

    let result = commands::run(&settings).and_then(|output| commands::encode(&output));

    match result {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#![warn(clippy::uninlined_format_args)]

mod config;
mod runner;

use std::{env, fs, process};

use tracing_subscriber::EnvFilter;
use warikan_application::{WarikanSession, WeightTokenCodec};
use warikan_infrastructure::LzStringCompressor;
use warikan_parser::parse_script;
use warikan_presentation::format_validation_error;

use crate::{config::AppConfig, runner::CliResult};

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> CliResult<()> {
    let Some(path) = env::args().nth(1) else {
        return Err("Usage: warikan-interpreter <file.warikan>".into());
    };

    let source =
        fs::read_to_string(&path).map_err(|err| format!("Failed to read '{path}': {err}"))?;

    let config = AppConfig::from_env().map_err(|err| err.to_string())?;
    tracing::debug!(
        roster_size = config.roster_size,
        rounding_unit = %config.rounding_unit,
        "Configuration loaded"
    );

    let script = parse_script(&source).map_err(|err| err.to_string())?;

    let compressor = LzStringCompressor;
    let codec = WeightTokenCodec::new(&compressor);
    let mut session = WarikanSession::new(codec, config.roster_size, config.rounding_unit)
        .map_err(|err| format_validation_error(&err))?;

    let output = runner::execute(&mut session, &script)?;
    print!("{output}");
    Ok(())
}

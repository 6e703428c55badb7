//! Command-line front end: reads a JSON bundle of raw upstream rows for one
//! employee, reconciles the requested range and prints the outcome as JSON.

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use thiserror::Error;
use tracing::info;

use dtr_engine::config::{ConfigLoader, EngineConfig};
use dtr_engine::error::EngineError;
use dtr_engine::ingest::RawBundle;
use dtr_engine::source::Reconciler;
use dtr_engine::telemetry::{self, TelemetryError};

#[derive(Parser, Debug)]
#[command(
    name = "dtr-reconcile",
    about = "Reconcile punches, shifts and approved exceptions into daily time record rows",
    version
)]
struct Cli {
    /// JSON bundle of raw upstream rows for one employee
    #[arg(long)]
    input: PathBuf,
    /// First date of the range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    from: NaiveDate,
    /// Last date of the range, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    to: NaiveDate,
    /// Evaluation date; only earlier dates can be marked absent (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Configuration directory holding engine.yaml and windows.yaml
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("dtr-reconcile: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let config = match &cli.config {
        Some(dir) => ConfigLoader::load(dir)?.into_config(),
        None => EngineConfig::default(),
    };

    let text = fs::read_to_string(&cli.input).map_err(|source| CliError::Read {
        path: cli.input.display().to_string(),
        source,
    })?;
    let bundle = RawBundle::from_json(&text)?;
    let source = bundle.to_source();

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    info!(input = %cli.input.display(), from = %cli.from, to = %cli.to, %today, "reconciling");

    let outcome = Reconciler::new(config).run(&source, &bundle.employee, cli.from, cli.to, today)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{json}");
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

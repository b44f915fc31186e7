//! cruise-planner – nearest-match cruise performance calculator.
//!
//! Loads an aircraft performance table, resolves weight / altitude / ISA
//! deviation to the closest tabulated cruise point and estimates flight time.

mod app;
mod calc;
mod data;
mod error;
mod query;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use app::Planner;
use query::PartialQuery;
use ui::prompt::{resolve_query, Prompter};
use ui::report;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Four human-readable lines, flight time rounded to 2 decimals
    Text,
    /// A single JSON object with inputs and results
    Json,
}

#[derive(Parser)]
#[command(name = "cruise-planner")]
#[command(about = "Estimate cruise fuel flow, true airspeed and flight time", long_about = None)]
struct Args {
    /// Performance data file (.json or .csv)
    #[arg(long, env = "CRUISE_DATA", default_value = "data/Cirrus SR22 G1.json")]
    data: PathBuf,

    /// Aircraft model name (defaults to the first model in the file)
    #[arg(long)]
    model: Option<String>,

    /// Gross weight in lbs
    #[arg(long, allow_negative_numbers = true)]
    weight: Option<f64>,

    /// Cruise altitude in ft
    #[arg(long, allow_negative_numbers = true)]
    altitude: Option<f64>,

    /// Temperature deviation from ISA in °C
    #[arg(long, allow_negative_numbers = true)]
    disa: Option<f64>,

    /// Trip distance in nautical miles
    #[arg(long, allow_negative_numbers = true)]
    distance: Option<f64>,

    /// Ask again after an unparsable answer instead of aborting
    #[arg(long)]
    retry: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print the model names in the data file and exit
    #[arg(long)]
    list_models: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(err) = run(args) {
        error::exit(&err);
    }
}

fn run(args: Args) -> Result<()> {
    let table = data::loader::load_file(&args.data)
        .with_context(|| format!("loading performance data from {}", args.data.display()))?;
    let planner = Planner::new(table).with_model(args.model);

    if args.list_models {
        let mut out = io::stdout().lock();
        report::write_model_list(&mut out, planner.table())?;
        return Ok(());
    }

    let partial = PartialQuery {
        weight_lbs: args.weight,
        altitude_ft: args.altitude,
        disa_c: args.disa,
        distance_nm: args.distance,
    };
    let query = {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout()).retry(args.retry);
        resolve_query(partial, &mut prompter).context("reading flight inputs")?
    };
    log::debug!("query: {query:?}");

    let estimate = planner
        .estimate(&query)
        .context("estimating cruise performance")?;

    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Text => report::write_text(&mut out, &estimate)?,
        OutputFormat::Json => report::write_json(&mut out, &estimate)?,
    }
    Ok(())
}

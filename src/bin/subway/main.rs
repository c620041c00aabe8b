//! subway - route tables in, instrument sequence tables out
//!
//! Run with: cargo run -- --config subway.toml

mod cli;
mod logging;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use subway_sequencer::{pipeline, Config};

use cli::Args;
use logging::init_tracing;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = Config::load(&args.config)
        .wrap_err_with(|| format!("loading config {}", args.config.display()))?;
    args.apply(&mut config);

    let report = pipeline::run(&config).wrap_err("sequencing route")?;
    tracing::info!(
        instruments = report.instruments,
        stations = report.stations,
        events = report.events,
        duration_ms = report.duration_ms,
        tables = report.written.len(),
        "done"
    );
    Ok(())
}

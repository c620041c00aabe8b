use std::path::PathBuf;

use clap::Parser;
use subway_sequencer::Config;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Turn a subway route into a timed instrument sequence")]
pub struct Args {
    /// Path to config TOML (missing file means defaults)
    #[arg(long, default_value = "subway.toml")]
    pub config: PathBuf,

    /// Global tempo (overrides config)
    #[arg(long)]
    pub bpm: Option<f64>,

    /// Meters of track per beat (overrides config)
    #[arg(long)]
    pub meters_per_beat: Option<f64>,

    /// Instrument catalog, tab-delimited
    #[arg(long)]
    pub instruments: Option<PathBuf>,

    /// Station route, tab-delimited
    #[arg(long)]
    pub stations: Option<PathBuf>,

    /// Directory for all output tables
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Skip the instruments and sequence tables
    #[arg(long, default_value_t = false)]
    pub no_sequence: bool,

    /// Skip the summary table
    #[arg(long, default_value_t = false)]
    pub no_summary: bool,

    /// Log at debug level
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(bpm) = self.bpm {
            config.tempo.bpm = bpm;
        }
        if let Some(meters) = self.meters_per_beat {
            config.tempo.meters_per_beat = meters;
        }
        if let Some(path) = &self.instruments {
            config.input.instruments = path.clone();
        }
        if let Some(path) = &self.stations {
            config.input.stations = path.clone();
        }
        if let Some(dir) = &self.out_dir {
            config.output.rebase(dir);
        }
        if self.no_sequence {
            config.output.write_sequence = false;
        }
        if self.no_summary {
            config.output.write_summary = false;
        }
    }
}

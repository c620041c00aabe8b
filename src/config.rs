//! Run configuration, read once at process start.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, Result};
use crate::sequencing::Tempo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempoConfig {
    #[serde(default = "TempoConfig::default_bpm")]
    pub bpm: f64,
    #[serde(default = "TempoConfig::default_meters_per_beat")]
    pub meters_per_beat: f64,
}

impl TempoConfig {
    fn default_bpm() -> f64 {
        90.0
    }
    fn default_meters_per_beat() -> f64 {
        40.0
    }
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self {
            bpm: Self::default_bpm(),
            meters_per_beat: Self::default_meters_per_beat(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "InputConfig::default_instruments")]
    pub instruments: PathBuf,
    #[serde(default = "InputConfig::default_stations")]
    pub stations: PathBuf,
    /// Prefix joined onto each instrument's `file` column
    #[serde(default = "InputConfig::default_instruments_dir")]
    pub instruments_dir: String,
}

impl InputConfig {
    fn default_instruments() -> PathBuf {
        PathBuf::from("data/instruments.csv")
    }
    fn default_stations() -> PathBuf {
        PathBuf::from("data/stations.csv")
    }
    fn default_instruments_dir() -> String {
        "instruments/".to_string()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            instruments: Self::default_instruments(),
            stations: Self::default_stations(),
            instruments_dir: Self::default_instruments_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_instruments")]
    pub instruments: PathBuf,
    #[serde(default = "OutputConfig::default_sequence")]
    pub sequence: PathBuf,
    #[serde(default = "OutputConfig::default_summary")]
    pub summary: PathBuf,
    /// Controls both the instruments-used table and the sequence table
    #[serde(default = "OutputConfig::default_write")]
    pub write_sequence: bool,
    #[serde(default = "OutputConfig::default_write")]
    pub write_summary: bool,
}

impl OutputConfig {
    fn default_instruments() -> PathBuf {
        PathBuf::from("data/ck_instruments.csv")
    }
    fn default_sequence() -> PathBuf {
        PathBuf::from("data/ck_sequence.csv")
    }
    fn default_summary() -> PathBuf {
        PathBuf::from("data/ck_summary.csv")
    }
    fn default_write() -> bool {
        true
    }

    /// Move all three output tables into `dir`, keeping their file names.
    pub fn rebase(&mut self, dir: &Path) {
        for path in [&mut self.instruments, &mut self.sequence, &mut self.summary] {
            if let Some(name) = path.file_name() {
                *path = dir.join(name);
            }
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            instruments: Self::default_instruments(),
            sequence: Self::default_sequence(),
            summary: Self::default_summary(),
            write_sequence: Self::default_write(),
            write_summary: Self::default_write(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tempo: TempoConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load a TOML config. A missing file yields the defaults; a file that
    /// exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
            .map_err(|err| PipelineError::Config(format!("{}: {err}", path.display())))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| PipelineError::Config(err.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.tempo.bpm.is_finite() && self.tempo.bpm > 0.0) {
            return Err(PipelineError::Config(format!(
                "bpm must be positive, got {}",
                self.tempo.bpm
            )));
        }
        if !(self.tempo.meters_per_beat.is_finite() && self.tempo.meters_per_beat > 0.0) {
            return Err(PipelineError::Config(format!(
                "meters_per_beat must be positive, got {}",
                self.tempo.meters_per_beat
            )));
        }
        if Tempo::from_config(&self.tempo).beat_ms == 0 {
            return Err(PipelineError::Config(format!(
                "bpm {} is too fast for millisecond beats",
                self.tempo.bpm
            )));
        }
        Ok(())
    }

    pub fn tempo(&self) -> Tempo {
        Tempo::from_config(&self.tempo)
    }
}

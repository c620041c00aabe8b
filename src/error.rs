//! Error types for the sequence pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run.
///
/// There is no recoverable variant: the pipeline is run-to-completion and
/// writes no output unless every stage succeeded.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input table not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("{}:{line}: {message}", file.display())]
    DataFormat {
        file: PathBuf,
        line: usize,
        message: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn data_format(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        PipelineError::DataFormat {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

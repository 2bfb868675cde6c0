//! Error types for spiceplot.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while plotting simulator output.
#[derive(Debug, Error)]
pub enum PlotError {
    /// None of the DC, TRAN or AC buckets contain a file.
    #[error("Error: Can't find any output files either from DC, TRAN or AC analysis.")]
    NoOutputFiles,

    /// AC files are present but none of their names declare a sweep type.
    #[error("Error: Sweep type from output file is wrong.\nValid options (LIN, LOG).")]
    UnknownSweepType,

    /// Filesystem access failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file name has no token at the legend label position.
    #[error("Cannot take legend label from '{file}': no token at index {index}")]
    MissingLabel { file: String, index: usize },

    /// A regex-accepted field could not be converted to a number.
    #[error("Invalid numeric field '{text}'")]
    InvalidNumber { text: String },

    /// The plotting backend failed to draw or encode a figure.
    #[error("Failed to render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },

    /// The image viewer could not be launched.
    #[error("Failed to open viewer for {}: {message}", path.display())]
    Viewer { path: PathBuf, message: String },
}

impl PlotError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlotError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the two deliberate fatal paths, which end the run with a
    /// success status. Every other variant is an unexpected failure.
    pub fn is_expected_fatal(&self) -> bool {
        matches!(self, PlotError::NoOutputFiles | PlotError::UnknownSweepType)
    }
}

/// Result type for spiceplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool reads, reconciles, or writes rosters.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when a CSV file cannot be parsed or a row cannot be written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a record lacks a column the reconciliation needs.
    #[error("record is missing column '{0}'")]
    MissingColumn(String),

    /// Raised when the requested output path does not name a file.
    #[error("output path has no file name: {0}")]
    InvalidOutput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

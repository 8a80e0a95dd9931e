//! Error types for the phone browser.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, BrowserError>;

/// Errors that can occur while loading or querying phone records.
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Failed to read from the input or write to the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file could not be opened
    #[error("Error opening file {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line whose fields could not be turned into a phone record
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Aggregation requested over zero records
    #[error("No data available")]
    EmptyStore,

    /// Menu input that is not one of the listed choices
    #[error("Invalid choice '{0}'")]
    InvalidMenuChoice(String),
}

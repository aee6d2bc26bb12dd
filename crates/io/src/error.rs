//! Error types for arcast-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the arcast-io crate.
///
/// Covers missing files, format-specific parse failures from CSV and
/// JSON, column lookup problems and values that are not numbers.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating-system read failure.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error originating from the JSON library.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying JSON failure.
        reason: String,
    },

    /// Returned when a requested column is not present in the input.
    #[error("column '{name}' not found (available: {available:?})")]
    MissingColumn {
        /// Requested column name or index.
        name: String,
        /// Columns that were found.
        available: Vec<String>,
    },

    /// Returned when a cell cannot be parsed as a number.
    #[error("invalid value {value:?} in column '{column}' at row {row}")]
    InvalidValue {
        /// Column the value belongs to.
        column: String,
        /// 1-based row: the file line for CSV and text, the array position for JSON.
        row: u64,
        /// The raw text.
        value: String,
    },

    /// Returned when a selected series holds no values.
    #[error("series '{name}' is empty")]
    EmptySeries {
        /// Name of the empty series.
        name: String,
    },

    /// Returned when a file extension maps to no known format.
    #[error("unsupported format for {}", path.display())]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },

    /// Wraps a failure while writing output.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// Path being written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}

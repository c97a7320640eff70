//! # Table Errors
//!
//! Error types for loading sample tables.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a sample table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The data file could not be opened or read.
    #[error("Cannot read data file '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data file exceeds the configured size limit.
    #[error("Data file '{}' is too large: {size} bytes (max: {max})", path.display())]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    /// A data row does not carry one sample per x value.
    #[error(
        "Raw data matrix in {origin}, line {line}: horizontal length of each line should be the same ({expected} != {actual})"
    )]
    DataFormat {
        origin: String,
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// A field survived cleanup but is not a number.
    #[error("Invalid number '{token}' in {origin}, line {line}")]
    InvalidNumber {
        origin: String,
        line: usize,
        token: String,
    },

    /// A line of the table is not valid UTF-8 text.
    #[error("Line {line} of {origin} is not valid UTF-8 text")]
    InvalidEncoding { origin: String, line: usize },

    /// A grid assembled from parts violates the rectangular shape.
    #[error("Ragged grid: {message}")]
    RaggedGrid { message: String },
}

impl TableError {
    /// Creates a file access error.
    pub fn file_access(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a column count mismatch error.
    pub fn data_format(origin: &str, line: usize, expected: usize, actual: usize) -> Self {
        Self::DataFormat {
            origin: origin.to_string(),
            line,
            expected,
            actual,
        }
    }

    /// Creates an invalid number error.
    pub fn invalid_number(origin: &str, line: usize, token: impl Into<String>) -> Self {
        Self::InvalidNumber {
            origin: origin.to_string(),
            line,
            token: token.into(),
        }
    }

    /// Creates an invalid encoding error.
    pub fn invalid_encoding(origin: &str, line: usize) -> Self {
        Self::InvalidEncoding {
            origin: origin.to_string(),
            line,
        }
    }

    /// Creates a ragged grid error.
    pub fn ragged(message: impl Into<String>) -> Self {
        Self::RaggedGrid {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by the table contents rather than the file system.
    pub fn is_data_format(&self) -> bool {
        matches!(
            self,
            Self::DataFormat { .. }
                | Self::InvalidNumber { .. }
                | Self::InvalidEncoding { .. }
                | Self::RaggedGrid { .. }
        )
    }
}

//! Unified error types for the postal lookup service.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Dataset load/parse error.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Dataset load and parse errors.
///
/// Every variant is fatal at startup: the service never begins serving with
/// a partial or absent dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset file {}: {source}", path.display())]
    FileOpen {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A row failed to parse: wrong column count, non-numeric integer
    /// column, or a flag column outside {0, 1}.
    #[error("malformed record at line {line}: {source}")]
    Malformed {
        /// 1-based line number of the offending row.
        line: u64,
        /// Underlying CSV/deserialization error.
        #[source]
        source: csv::Error,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;

//! Error types for flights.
//!
//! This module defines all error types used throughout the flights crate,
//! providing enough context to tell a missing data file apart from a broken one.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flights operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Neither `--data` nor the environment named a data file.
    #[error("The data file name is absent")]
    DataFileAbsent,

    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Storage Errors ===
    /// The data file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The data file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a JSON array of flight records.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    // === I/O Errors ===
    /// Writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flights operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Check if this error means no data file path could be resolved.
    #[must_use]
    pub fn is_data_file_absent(&self) -> bool {
        matches!(self, Self::DataFileAbsent)
    }
}

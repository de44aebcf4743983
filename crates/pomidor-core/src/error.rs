//! Error types for pomidor-core.
//!
//! Only the collaborators at the edges can fail: storage (disk) and settings
//! input (user-typed values). The timer engine and the weekly aggregator are
//! total over validated inputs and expose no fallible operations.

use std::path::PathBuf;
use thiserror::Error;

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create the data directory
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the data file
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the data file
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the data document
    #[error("failed to serialize data document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Settings input errors.
///
/// A failed update leaves the previous value in place; callers report the
/// error and keep going with the last valid settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Duration or cadence value of zero
    #[error("value for '{field}' must be greater than zero")]
    NonPositive { field: &'static str },

    /// Value does not parse as the expected type
    #[error("cannot parse '{value}' as a value for '{key}'")]
    InvalidValue { key: String, value: String },

    /// Key does not name a setting
    #[error("unknown settings key: {0}")]
    UnknownKey(String),
}

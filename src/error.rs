//! Error handling for column normalization.
//!
//! Per-cell problems never surface here: a malformed cell becomes a
//! [`Normalized::Rejected`](crate::models::Normalized) outcome. These errors
//! cover the collaborator boundary instead (missing columns, unusable dtypes,
//! bad configuration).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Column '{column}' not found in frame")]
    ColumnNotFound { column: String },

    #[error("Column '{column}' has dtype {dtype} which cannot be read as text")]
    UnsupportedDtype { column: String, dtype: String },

    #[error("Unknown column name: {name}")]
    UnknownColumn { name: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration file {path}: {reason}")]
    ConfigFile { path: PathBuf, reason: String },

    #[error("Normalization task failed for column '{column}': {reason}")]
    Task { column: String, reason: String },
}

impl NormalizerError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a column not found error
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizerError>;

//! Error types for the compatibility matrix engine

use std::io;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, CompatError>;

/// Main error type for the compatibility matrix engine.
///
/// The aggregation pass itself has no failure paths (missing fields and
/// unrecognized status strings degrade to `unknown`/zero); errors only
/// arise at the ingestion boundary or when loading configuration.
#[derive(Error, Debug)]
pub enum CompatError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed report corpus (contract violation by the loader's caller)
    #[error("Invalid report corpus: {0}")]
    InvalidCorpus(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid parameter (e.g. unknown matrix type or category name)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

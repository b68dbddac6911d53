//! # Store Errors
//!
//! Error types for the airport store and dataset loading.

use axum::http::StatusCode;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the airport store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record whose `icao` equals the given code exactly
    #[error("no airport with icao: {icao}")]
    NotFound { icao: String },

    /// Insert rejected: record is not an object or is empty
    #[error("record must be a non-empty JSON object")]
    InvalidRecord,

    /// Store lock poisoned by a panicked handler
    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// HTTP status for this error.
    ///
    /// Not-found maps to 400, not 404; existing clients depend on it.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::NotFound { .. } => StatusCode::BAD_REQUEST,
            StoreError::InvalidRecord => StatusCode::BAD_REQUEST,
            StoreError::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors raised while loading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset contents are not a JSON array of records
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

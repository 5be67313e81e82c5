//! Storage-specific error types for the JSON snapshot store.
//!
//! This module provides error types that wrap filesystem and serialization
//! errors and convert them to the storage-agnostic error types defined in
//! `rentfolio_core`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use rentfolio_core::errors::{Error, StoreError};

/// Storage-specific errors that wrap `std::io` and `serde_json` types.
///
/// These errors are internal to the storage layer and are converted to
/// `rentfolio_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to open data directory {}: {source}", .path.display())]
    OpenFailed { path: PathBuf, source: io::Error },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed { path: PathBuf, source: io::Error },

    #[error("JSON encoding failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::OpenFailed { .. } => {
                Error::Store(StoreError::OpenFailed(err.to_string()))
            }
            StorageError::ReadFailed { .. } => {
                Error::Store(StoreError::ReadFailed(err.to_string()))
            }
            StorageError::WriteFailed { .. } => {
                Error::Store(StoreError::WriteFailed(err.to_string()))
            }
            StorageError::Serialization(e) => {
                Error::Store(StoreError::Serialization(e.to_string()))
            }
        }
    }
}

//! Core error types for the Rentfolio application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (I/O, JSON parsing, etc.) are converted to these types by the storage layer.

use thiserror::Error;

use crate::accounts::AccountError;
use crate::payments::PaymentError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the rent ledger.
///
/// This enum represents all possible errors that can occur in the
/// application. Storage-specific errors are wrapped in string form to keep
/// this type storage-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for persistence operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert its own errors (filesystem, serialization, etc.) into this
/// format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store directory could not be opened or created.
    #[error("Failed to open store: {0}")]
    OpenFailed(String),

    /// A snapshot file could not be read.
    #[error("Failed to read store file: {0}")]
    ReadFailed(String),

    /// A snapshot file could not be written.
    #[error("Failed to write store file: {0}")]
    WriteFailed(String),

    /// A snapshot could not be serialized or deserialized.
    #[error("Failed to encode store data: {0}")]
    Serialization(String),

    /// Backup export failed.
    #[error("Backup export failed: {0}")]
    BackupFailed(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

//! Account error types.

use thiserror::Error;

/// Custom error type for account-related operations
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("An account with mobile number {0} already exists")]
    DuplicateMobileNumber(String),

    #[error("Invalid mobile number or password")]
    InvalidCredentials,

    #[error("Property owner {0} does not exist or is not a landlord")]
    UnknownPropertyOwner(String),

    #[error("Account not found: {0}")]
    NotFound(String),
}

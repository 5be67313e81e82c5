//! Payment error types.

use thiserror::Error;

use super::payments_model::RentMonth;

/// Custom error type for payment-related operations
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("No tenant selected for the payment record")]
    MissingTenant,

    #[error("Rent for {month} has already been recorded for this tenant")]
    DuplicatePaymentForMonth { month: RentMonth },

    #[error("Payment record not found: {0}")]
    NotFound(String),
}

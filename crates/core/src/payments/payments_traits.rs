//! Payment repository and service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::payments_model::{NewPayment, Payment, RentMonth};
use crate::accounts::Account;
use crate::errors::Result;

/// Trait defining the contract for Payment repository operations.
///
/// The ledger is append-only from the caller's point of view: records are
/// created, read, and removed only by the account-deletion cascade.
#[async_trait]
pub trait PaymentRepositoryTrait: Send + Sync {
    /// Persists a new payment record at the head of the ledger.
    ///
    /// Assigns the id, payment date, and receipt number.
    async fn create(&self, new_payment: NewPayment) -> Result<Payment>;

    /// Removes every record belonging to an account.
    ///
    /// Returns the number of deleted records.
    async fn delete_for_account(&self, user_id: &str) -> Result<usize>;

    /// Retrieves a record by its ID.
    fn get_by_id(&self, payment_id: &str) -> Result<Payment>;

    /// Lists the whole ledger, most-recent-first.
    fn list(&self) -> Result<Vec<Payment>>;

    /// Lists the records of one account, most-recent-first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Payment>>;

    /// Whether an account already has a record for a month.
    fn exists_for_month(&self, user_id: &str, month: RentMonth) -> Result<bool>;
}

/// Trait defining the contract for Payment service operations.
#[async_trait]
pub trait PaymentServiceTrait: Send + Sync {
    /// Records a payment after tenant and one-per-month checks.
    async fn record_payment(&self, new_payment: NewPayment) -> Result<Payment>;

    /// Lists the records visible to an account: a landlord sees the records
    /// of all owned tenants, a tenant its own.
    fn list_for_account(&self, account: &Account) -> Result<Vec<Payment>>;

    /// Retrieves a record by ID (receipt view).
    fn get_payment(&self, payment_id: &str) -> Result<Payment>;

    /// Sums the rent amounts of a slice of records.
    fn total_for(&self, payments: &[Payment]) -> Decimal;
}

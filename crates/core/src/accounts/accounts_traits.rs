//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! storage-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, AccountRole, NewAccount, ProfileUpdate};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations of this trait handle the persistence of account data.
/// The trait is storage-agnostic - persistence details are handled by
/// concrete implementations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account.
    ///
    /// Assigns a fresh id unless `new_account.id` is preset (master seed).
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Applies a profile edit to an existing account.
    async fn update(&self, update: ProfileUpdate) -> Result<Account>;

    /// Deletes an account by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, account_id: &str) -> Result<usize>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Finds the account holding a mobile number, if any.
    fn find_by_mobile(&self, mobile_number: &str) -> Result<Option<Account>>;

    /// Finds the account matching a mobile number / password pair exactly.
    fn find_by_credentials(&self, mobile_number: &str, password: &str)
        -> Result<Option<Account>>;

    /// Lists every account in the directory.
    fn list(&self) -> Result<Vec<Account>>;

    /// Lists accounts holding a given role.
    fn list_by_role(&self, role: AccountRole) -> Result<Vec<Account>>;

    /// Lists the tenant accounts owned by a landlord.
    fn list_tenants_of(&self, landlord_id: &str) -> Result<Vec<Account>>;
}

/// Trait defining the contract for Account service operations.
///
/// The service layer handles business logic and coordinates between
/// repositories and other services.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Registers a new account with business validation.
    ///
    /// Rejects duplicate mobile numbers; tenant registrations must name an
    /// existing landlord.
    async fn register(&self, new_account: NewAccount) -> Result<Account>;

    /// Matches a mobile number / password pair against the directory.
    fn authenticate(&self, mobile_number: &str, password: &str) -> Result<Account>;

    /// Overwrites an account's name and mobile number.
    async fn update_profile(&self, update: ProfileUpdate) -> Result<Account>;

    /// Deletes a tenant account and every payment record it owns.
    async fn delete_tenant(&self, account_id: &str) -> Result<()>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;

    /// Lists every account in the directory.
    fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Lists landlord accounts (owner choices at tenant registration).
    fn list_landlords(&self) -> Result<Vec<Account>>;

    /// Lists the tenant accounts owned by a landlord.
    fn list_tenants_of(&self, landlord_id: &str) -> Result<Vec<Account>>;

    /// Seeds the master landlord account if it is not present yet.
    ///
    /// Idempotent: repeated calls never insert a second copy.
    async fn ensure_master_account(&self) -> Result<Account>;
}

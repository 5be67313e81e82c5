use log::debug;
use std::sync::Arc;

use super::accounts_constants::{master_account, MASTER_MOBILE_NUMBER};
use super::accounts_errors::AccountError;
use super::accounts_model::{Account, AccountRole, NewAccount, ProfileUpdate};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;
use crate::payments::PaymentRepositoryTrait;

/// Service for managing the account directory.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
    payment_repository: Arc<dyn PaymentRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(
        repository: Arc<dyn AccountRepositoryTrait>,
        payment_repository: Arc<dyn PaymentRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            payment_repository,
        }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    /// Registers a new account after uniqueness and ownership checks
    async fn register(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        debug!(
            "Registering {} account for mobile {}",
            new_account.role.as_str(),
            new_account.mobile_number
        );

        if self
            .repository
            .find_by_mobile(&new_account.mobile_number)?
            .is_some()
        {
            return Err(AccountError::DuplicateMobileNumber(new_account.mobile_number).into());
        }

        if new_account.role == AccountRole::Tenant {
            // validate() guarantees the owner id is present for tenants
            let owner_id = new_account.property_owner_id.clone().unwrap_or_default();
            let owner_is_landlord = self
                .repository
                .list_by_role(AccountRole::Landlord)?
                .iter()
                .any(|landlord| landlord.id == owner_id);
            if !owner_is_landlord {
                return Err(AccountError::UnknownPropertyOwner(owner_id).into());
            }
        }

        self.repository.create(new_account).await
    }

    /// Matches credentials exactly against the directory
    fn authenticate(&self, mobile_number: &str, password: &str) -> Result<Account> {
        match self
            .repository
            .find_by_credentials(mobile_number, password)?
        {
            Some(account) => Ok(account),
            None => Err(AccountError::InvalidCredentials.into()),
        }
    }

    /// Overwrites an account's name and mobile number
    async fn update_profile(&self, update: ProfileUpdate) -> Result<Account> {
        update.validate()?;
        // Mobile uniqueness is only guarded at registration; edits skip the
        // re-check, matching the source system.
        self.repository.update(update).await
    }

    /// Deletes a tenant and cascades its payment records
    async fn delete_tenant(&self, account_id: &str) -> Result<()> {
        let account = self.repository.get_by_id(account_id)?;
        let removed_records = self.payment_repository.delete_for_account(&account.id).await?;
        self.repository.delete(&account.id).await?;
        debug!(
            "Deleted account {} and {} payment records",
            account.id, removed_records
        );
        Ok(())
    }

    /// Retrieves an account by its ID
    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.repository.get_by_id(account_id)
    }

    /// Lists every account in the directory
    fn list_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list()
    }

    /// Lists landlord accounts
    fn list_landlords(&self) -> Result<Vec<Account>> {
        self.repository.list_by_role(AccountRole::Landlord)
    }

    /// Lists the tenants owned by a landlord
    fn list_tenants_of(&self, landlord_id: &str) -> Result<Vec<Account>> {
        self.repository.list_tenants_of(landlord_id)
    }

    /// Seeds the master landlord if its mobile number is not registered yet
    async fn ensure_master_account(&self) -> Result<Account> {
        if let Some(existing) = self.repository.find_by_mobile(MASTER_MOBILE_NUMBER)? {
            return Ok(existing);
        }
        debug!("Seeding master landlord account");
        self.repository.create(master_account()).await
    }
}

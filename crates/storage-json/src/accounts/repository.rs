use async_trait::async_trait;
use std::sync::Arc;

use rentfolio_core::accounts::{
    Account, AccountError, AccountRepositoryTrait, AccountRole, NewAccount, ProfileUpdate,
};
use rentfolio_core::errors::Result;

use crate::store::JsonStore;

/// Repository for managing account data in the snapshot store.
pub struct AccountRepository {
    store: Arc<JsonStore>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    /// Creates a new account, assigning a fresh id unless one is preset
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;

        let id = new_account
            .id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let account = new_account.into_account(id);

        let created = self.store.mutate_accounts(|accounts| {
            accounts.push(account.clone());
            account
        })?;
        Ok(created)
    }

    /// Overwrites the mutable profile fields of an existing account
    async fn update(&self, update: ProfileUpdate) -> Result<Account> {
        update.validate()?;

        let updated = self.store.mutate_accounts(|accounts| {
            accounts
                .iter_mut()
                .find(|account| account.id == update.account_id)
                .map(|account| {
                    account.full_name = update.full_name.clone();
                    account.mobile_number = update.mobile_number.clone();
                    account.clone()
                })
        })?;
        updated.ok_or_else(|| AccountError::NotFound(update.account_id).into())
    }

    /// Removes an account from the directory
    async fn delete(&self, account_id: &str) -> Result<usize> {
        let removed = self.store.mutate_accounts(|accounts| {
            let before = accounts.len();
            accounts.retain(|account| account.id != account_id);
            before - accounts.len()
        })?;
        Ok(removed)
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        self.store
            .with_accounts(|accounts| {
                accounts
                    .iter()
                    .find(|account| account.id == account_id)
                    .cloned()
            })
            .ok_or_else(|| AccountError::NotFound(account_id.to_string()).into())
    }

    fn find_by_mobile(&self, mobile_number: &str) -> Result<Option<Account>> {
        Ok(self.store.with_accounts(|accounts| {
            accounts
                .iter()
                .find(|account| account.mobile_number == mobile_number)
                .cloned()
        }))
    }

    fn find_by_credentials(
        &self,
        mobile_number: &str,
        password: &str,
    ) -> Result<Option<Account>> {
        // Exact comparison of both fields, like the source system.
        Ok(self.store.with_accounts(|accounts| {
            accounts
                .iter()
                .find(|account| {
                    account.mobile_number == mobile_number && account.password == password
                })
                .cloned()
        }))
    }

    fn list(&self) -> Result<Vec<Account>> {
        Ok(self.store.with_accounts(|accounts| accounts.to_vec()))
    }

    fn list_by_role(&self, role: AccountRole) -> Result<Vec<Account>> {
        Ok(self.store.with_accounts(|accounts| {
            accounts
                .iter()
                .filter(|account| account.role == role)
                .cloned()
                .collect()
        }))
    }

    fn list_tenants_of(&self, landlord_id: &str) -> Result<Vec<Account>> {
        Ok(self.store.with_accounts(|accounts| {
            accounts
                .iter()
                .filter(|account| account.property_owner_id.as_deref() == Some(landlord_id))
                .cloned()
                .collect()
        }))
    }
}

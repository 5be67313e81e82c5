use log::debug;
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};

use super::session_model::{AuthIntent, SessionState};
use super::session_traits::{SessionRepositoryTrait, SessionServiceTrait};
use crate::accounts::{Account, AccountError, AccountServiceTrait, NewAccount};
use crate::errors::{Error, Result};
use crate::payments::{Payment, PaymentServiceTrait};

/// Service driving the session lifecycle and the read scoping derived from
/// the logged-in account.
pub struct SessionService {
    account_service: Arc<dyn AccountServiceTrait>,
    payment_service: Arc<dyn PaymentServiceTrait>,
    repository: Arc<dyn SessionRepositoryTrait>,
    state: RwLock<SessionState>,
}

impl SessionService {
    /// Creates a new SessionService instance in the LoggedOut state
    pub fn new(
        account_service: Arc<dyn AccountServiceTrait>,
        payment_service: Arc<dyn PaymentServiceTrait>,
        repository: Arc<dyn SessionRepositoryTrait>,
    ) -> Self {
        Self {
            account_service,
            payment_service,
            repository,
            state: RwLock::new(SessionState::default()),
        }
    }

    fn require_account(&self) -> Result<Account> {
        self.current_account()
            .ok_or_else(|| Error::Unexpected("no active session".to_string()))
    }

    async fn enter(&self, account: Account) -> Result<Account> {
        self.repository.set_current_account_id(&account.id).await?;
        *self.state.write().unwrap() = SessionState::LoggedIn(account.clone());
        Ok(account)
    }
}

#[async_trait::async_trait]
impl SessionServiceTrait for SessionService {
    /// Registers a new account and logs it in
    async fn register(&self, new_account: NewAccount) -> Result<Account> {
        let account = self.account_service.register(new_account).await?;
        self.enter(account).await
    }

    /// Authenticates and logs in
    async fn login(&self, mobile_number: &str, password: &str) -> Result<Account> {
        let account = self.account_service.authenticate(mobile_number, password)?;
        debug!("Session opened for account {}", account.id);
        self.enter(account).await
    }

    /// Logs out and forgets the persisted session
    async fn logout(&self) -> Result<()> {
        self.repository.clear_current_account_id().await?;
        *self.state.write().unwrap() = SessionState::LoggedOut {
            intent: AuthIntent::Login,
        };
        debug!("Session closed");
        Ok(())
    }

    /// Re-enters a persisted session if its account still exists
    fn restore(&self) -> Result<Option<Account>> {
        let Some(account_id) = self.repository.current_account_id()? else {
            return Ok(None);
        };
        match self.account_service.get_account(&account_id) {
            Ok(account) => {
                debug!("Restored session for account {}", account.id);
                *self.state.write().unwrap() = SessionState::LoggedIn(account.clone());
                Ok(Some(account))
            }
            // A stale pointer is left in place; the caller stays logged out.
            Err(Error::Account(AccountError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn current_account(&self) -> Option<Account> {
        self.state.read().unwrap().account().cloned()
    }

    fn state(&self) -> SessionState {
        self.state.read().unwrap().clone()
    }

    fn intent(&self) -> Option<AuthIntent> {
        match *self.state.read().unwrap() {
            SessionState::LoggedOut { intent } => Some(intent),
            SessionState::LoggedIn(_) => None,
        }
    }

    fn set_intent(&self, intent: AuthIntent) {
        let mut state = self.state.write().unwrap();
        if let SessionState::LoggedOut { intent: current } = &mut *state {
            *current = intent;
        }
    }

    /// Accounts visible under the scoping rule
    fn visible_accounts(&self) -> Result<Vec<Account>> {
        let account = self.require_account()?;
        let mut visible = vec![account.clone()];
        if account.is_landlord() {
            visible.extend(self.account_service.list_tenants_of(&account.id)?);
        } else if let Some(owner_id) = &account.property_owner_id {
            match self.account_service.get_account(owner_id) {
                Ok(landlord) => visible.push(landlord),
                // A dangling owner leaves the tenant seeing only itself.
                Err(Error::Account(AccountError::NotFound(_))) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(visible)
    }

    /// Payment records visible under the scoping rule
    fn visible_payments(&self) -> Result<Vec<Payment>> {
        let account = self.require_account()?;
        self.payment_service.list_for_account(&account)
    }

    /// Total rent collected over the visible records
    fn total_collected(&self) -> Result<Decimal> {
        let payments = self.visible_payments()?;
        Ok(self.payment_service.total_for(&payments))
    }
}

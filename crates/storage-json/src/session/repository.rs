use async_trait::async_trait;
use std::sync::Arc;

use rentfolio_core::errors::Result;
use rentfolio_core::session::SessionRepositoryTrait;

use crate::store::JsonStore;

/// Repository for the durable session pointer.
///
/// Only the logged-in account id is stored; the absence of the session file
/// encodes the LoggedOut state.
pub struct SessionRepository {
    store: Arc<JsonStore>,
}

impl SessionRepository {
    /// Creates a new SessionRepository instance
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepositoryTrait for SessionRepository {
    fn current_account_id(&self) -> Result<Option<String>> {
        Ok(self.store.session_account_id())
    }

    async fn set_current_account_id(&self, account_id: &str) -> Result<()> {
        self.store.set_session_account_id(account_id)?;
        Ok(())
    }

    async fn clear_current_account_id(&self) -> Result<()> {
        self.store.clear_session_account_id()?;
        Ok(())
    }
}

//! Session repository and service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::session_model::{AuthIntent, SessionState};
use crate::accounts::{Account, NewAccount};
use crate::errors::Result;
use crate::payments::Payment;

/// Trait defining the contract for session persistence.
///
/// Only the logged-in account id is durable; everything else about the
/// session lives in memory.
#[async_trait]
pub trait SessionRepositoryTrait: Send + Sync {
    /// Reads the persisted account id, if a session was left open.
    fn current_account_id(&self) -> Result<Option<String>>;

    /// Persists the account id of the active session.
    async fn set_current_account_id(&self, account_id: &str) -> Result<()>;

    /// Forgets the persisted session.
    async fn clear_current_account_id(&self) -> Result<()>;
}

/// Trait defining the contract for the session lifecycle and the
/// authorization scoping applied to reads.
///
/// Scoping is advisory, not cryptographic: it decides what a logged-in
/// account is shown, nothing more.
#[async_trait]
pub trait SessionServiceTrait: Send + Sync {
    /// Registers a new account and enters the LoggedIn state with it.
    async fn register(&self, new_account: NewAccount) -> Result<Account>;

    /// Authenticates and enters the LoggedIn state.
    async fn login(&self, mobile_number: &str, password: &str) -> Result<Account>;

    /// Leaves the LoggedIn state and forgets the persisted session.
    async fn logout(&self) -> Result<()>;

    /// Re-enters the LoggedIn state from a persisted session, if one exists
    /// and still points at a live account.
    fn restore(&self) -> Result<Option<Account>>;

    /// The logged-in account, if any.
    fn current_account(&self) -> Option<Account>;

    /// Snapshot of the session state.
    fn state(&self) -> SessionState;

    /// The logged-out auth intent, if logged out.
    fn intent(&self) -> Option<AuthIntent>;

    /// Switches the logged-out auth intent. No-op while logged in.
    fn set_intent(&self, intent: AuthIntent);

    /// Accounts visible to the logged-in account: a landlord sees itself
    /// plus its tenants, a tenant itself plus its landlord.
    fn visible_accounts(&self) -> Result<Vec<Account>>;

    /// Payment records visible to the logged-in account, most-recent-first.
    fn visible_payments(&self) -> Result<Vec<Payment>>;

    /// Total rent collected over the visible records.
    fn total_collected(&self) -> Result<Decimal>;
}

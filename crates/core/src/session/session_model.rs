//! Session domain models.

use crate::accounts::Account;

/// Which auth surface a logged-out user is headed for. Presentation-level
/// state only - it is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthIntent {
    #[default]
    Login,
    Register,
}

/// Lifecycle state of the active session.
///
/// There is no expiry: the state only changes through login, registration,
/// or an explicit logout.
#[derive(Debug, Clone)]
pub enum SessionState {
    LoggedOut { intent: AuthIntent },
    LoggedIn(Account),
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn(_))
    }

    /// The logged-in account, if any.
    pub fn account(&self) -> Option<&Account> {
        match self {
            SessionState::LoggedIn(account) => Some(account),
            SessionState::LoggedOut { .. } => None,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::LoggedOut {
            intent: AuthIntent::default(),
        }
    }
}

//! The JSON snapshot store.
//!
//! Three logical keys, one file each, all under a single data directory:
//!
//! | key      | file            | contents                                   |
//! |----------|-----------------|--------------------------------------------|
//! | accounts | `accounts.json` | full account collection                    |
//! | payments | `payments.json` | full payment ledger                        |
//! | session  | `session.json`  | logged-in account id (absent == LoggedOut) |
//!
//! Everything is loaded into memory at open time; every mutation rewrites
//! the affected snapshot atomically before returning. An absent file is the
//! empty initial state; an unreadable or malformed file is logged and
//! treated the same way rather than failing the open.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use rentfolio_core::accounts::Account;
use rentfolio_core::payments::Payment;

use crate::errors::StorageError;

pub const ACCOUNTS_FILE: &str = "accounts.json";
pub const PAYMENTS_FILE: &str = "payments.json";
pub const SESSION_FILE: &str = "session.json";

/// In-memory mirror of the three snapshot files.
pub struct JsonStore {
    data_dir: PathBuf,
    accounts: RwLock<Vec<Account>>,
    payments: RwLock<Vec<Payment>>,
    session: RwLock<Option<String>>,
}

impl JsonStore {
    /// Opens the store, creating the data directory if needed and loading
    /// whatever snapshots are present.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|source| StorageError::OpenFailed {
            path: data_dir.clone(),
            source,
        })?;

        let accounts = load_snapshot(&data_dir.join(ACCOUNTS_FILE));
        let payments = load_snapshot(&data_dir.join(PAYMENTS_FILE));
        let session = load_snapshot(&data_dir.join(SESSION_FILE));

        Ok(Self {
            data_dir,
            accounts: RwLock::new(accounts),
            payments: RwLock::new(payments),
            session: RwLock::new(session),
        })
    }

    /// Runs a read-only closure over the account collection.
    pub(crate) fn with_accounts<R>(&self, f: impl FnOnce(&[Account]) -> R) -> R {
        f(&self.accounts.read().unwrap())
    }

    /// Mutates the account collection and persists the new snapshot.
    pub(crate) fn mutate_accounts<R>(
        &self,
        f: impl FnOnce(&mut Vec<Account>) -> R,
    ) -> Result<R, StorageError> {
        let mut accounts = self.accounts.write().unwrap();
        let out = f(&mut accounts);
        self.persist(ACCOUNTS_FILE, &*accounts)?;
        Ok(out)
    }

    /// Runs a read-only closure over the payment ledger.
    pub(crate) fn with_payments<R>(&self, f: impl FnOnce(&[Payment]) -> R) -> R {
        f(&self.payments.read().unwrap())
    }

    /// Mutates the payment ledger and persists the new snapshot.
    pub(crate) fn mutate_payments<R>(
        &self,
        f: impl FnOnce(&mut Vec<Payment>) -> R,
    ) -> Result<R, StorageError> {
        let mut payments = self.payments.write().unwrap();
        let out = f(&mut payments);
        self.persist(PAYMENTS_FILE, &*payments)?;
        Ok(out)
    }

    /// The persisted session pointer, if a session was left open.
    pub(crate) fn session_account_id(&self) -> Option<String> {
        self.session.read().unwrap().clone()
    }

    /// Persists the session pointer.
    pub(crate) fn set_session_account_id(&self, account_id: &str) -> Result<(), StorageError> {
        let mut session = self.session.write().unwrap();
        *session = Some(account_id.to_string());
        self.persist(SESSION_FILE, &*session)
    }

    /// Forgets the session pointer. Logged-out is encoded by the absence of
    /// the session file, so this removes it rather than writing a tombstone.
    pub(crate) fn clear_session_account_id(&self) -> Result<(), StorageError> {
        let mut session = self.session.write().unwrap();
        *session = None;
        let path = self.data_dir.join(SESSION_FILE);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::WriteFailed { path, source }),
        }
    }

    /// Serializes a collection and atomically replaces its snapshot file:
    /// the JSON is written to a sibling temp file first, then renamed over
    /// the target, so a crash mid-write leaves the old snapshot intact.
    fn persist<T: Serialize>(&self, file_name: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        let path = self.data_dir.join(file_name);
        let tmp = self.data_dir.join(format!("{file_name}.tmp"));
        fs::write(&tmp, json).map_err(|source| StorageError::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::WriteFailed { path, source })
    }
}

/// Loads one snapshot file, degrading to the empty initial state on any
/// problem other than a clean read.
fn load_snapshot<T: DeserializeOwned + Default>(path: &Path) -> T {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            warn!(
                "Could not read {}, starting from an empty snapshot: {}",
                path.display(),
                e
            );
            return T::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                "Malformed snapshot {}, starting from an empty one: {}",
                path.display(),
                e
            );
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentfolio_core::accounts::AccountRole;
    use tempfile::TempDir;

    fn test_account(id: &str) -> Account {
        Account {
            id: id.to_string(),
            full_name: "Test Owner".to_string(),
            property_name: Some("Test Home".to_string()),
            role: AccountRole::Landlord,
            mobile_number: format!("017-{id}"),
            password: "pw".to_string(),
            profile_picture: None,
            property_owner_id: None,
        }
    }

    #[test]
    fn test_open_empty_dir_yields_empty_collections() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        assert!(store.with_accounts(|accounts| accounts.is_empty()));
        assert!(store.with_payments(|payments| payments.is_empty()));
        assert!(store.session_account_id().is_none());
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = JsonStore::open(dir.path()).unwrap();
            store
                .mutate_accounts(|accounts| accounts.push(test_account("a-1")))
                .unwrap();
            store.set_session_account_id("a-1").unwrap();
        }

        let store = JsonStore::open(dir.path()).unwrap();
        assert_eq!(store.with_accounts(|accounts| accounts.len()), 1);
        assert_eq!(store.session_account_id().as_deref(), Some("a-1"));
    }

    #[test]
    fn test_malformed_snapshot_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(ACCOUNTS_FILE), "{not json").unwrap();
        std::fs::write(dir.path().join(PAYMENTS_FILE), "42").unwrap();

        let store = JsonStore::open(dir.path()).unwrap();
        assert!(store.with_accounts(|accounts| accounts.is_empty()));
        assert!(store.with_payments(|payments| payments.is_empty()));
    }

    #[test]
    fn test_persist_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        store
            .mutate_accounts(|accounts| accounts.push(test_account("a-1")))
            .unwrap();

        assert!(dir.path().join(ACCOUNTS_FILE).exists());
        assert!(!dir.path().join(format!("{ACCOUNTS_FILE}.tmp")).exists());
    }

    #[test]
    fn test_clear_session_removes_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        store.set_session_account_id("a-1").unwrap();
        assert!(dir.path().join(SESSION_FILE).exists());

        store.clear_session_account_id().unwrap();
        assert!(!dir.path().join(SESSION_FILE).exists());
        assert!(store.session_account_id().is_none());

        // Clearing an already-absent session is fine.
        store.clear_session_account_id().unwrap();
    }
}

//! Backup export.
//!
//! A read-only snapshot of both collections plus a timestamp, serialized as
//! a single JSON document. There is no import path; the document is meant
//! for download/archival only.

use serde::{Deserialize, Serialize};

use rentfolio_core::accounts::Account;
use rentfolio_core::constants::APP_NAME;
use rentfolio_core::errors::{Error, Result, StoreError};
use rentfolio_core::payments::Payment;

use crate::store::JsonStore;

/// Full backup payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPayload {
    /// App name that produced the backup.
    pub app: String,
    /// Crate version that produced the backup.
    pub version: String,
    /// RFC 3339 timestamp of when the backup was created.
    pub created_at: String,
    pub accounts: Vec<Account>,
    pub payments: Vec<Payment>,
}

impl BackupPayload {
    /// Renders the payload as a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Store(StoreError::BackupFailed(e.to_string())))
    }
}

impl JsonStore {
    /// Exports both collections into a serializable backup document.
    pub fn export_backup(&self) -> BackupPayload {
        BackupPayload {
            app: APP_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            accounts: self.with_accounts(|accounts| accounts.to_vec()),
            payments: self.with_payments(|payments| payments.to_vec()),
        }
    }
}

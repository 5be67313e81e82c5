//! JSON snapshot storage implementation for Rentfolio.
//!
//! This crate provides all filesystem-related functionality using whole-file
//! JSON snapshots. It implements the repository traits defined in
//! `rentfolio-core` and contains:
//! - The snapshot store (`JsonStore`) with its load/save lifecycle
//! - Repository implementations for accounts, payments, and the session
//! - The backup/export operation
//!
//! # Architecture
//!
//! This crate is the only place in the application where the filesystem is
//! touched. All other crates (`core`, `ai`) are storage-agnostic and work
//! with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-json (this crate)
//!              │
//!              ▼
//!   accounts.json / payments.json / session.json
//! ```
//!
//! Every mutating repository call rewrites its whole collection snapshot
//! before returning; the write is atomic (temp file + rename), so a crash
//! mid-write leaves the previous snapshot intact.

pub mod backup;
pub mod errors;
pub mod store;

// Repository implementations
pub mod accounts;
pub mod payments;
pub mod session;

pub use backup::BackupPayload;
pub use errors::StorageError;
pub use store::JsonStore;

pub use accounts::AccountRepository;
pub use payments::PaymentRepository;
pub use session::SessionRepository;

// Re-export from rentfolio-core for convenience
pub use rentfolio_core::errors::{Error, Result, StoreError};

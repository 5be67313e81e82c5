//! Rentfolio Core - Domain logic for the rent ledger.
//!
//! This crate contains the storage-agnostic business logic: account
//! directory, payment ledger, and session lifecycle. Repository traits
//! declared here are implemented by the `rentfolio-storage-json` crate.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod payments;
pub mod session;

pub use errors::{Error, Result};

//! Accounts module - domain models, services, and traits.

mod accounts_constants;
mod accounts_errors;
mod accounts_model;
mod accounts_service;
mod accounts_traits;



pub use accounts_constants::*;
pub use accounts_errors::AccountError;
pub use accounts_model::{Account, AccountRole, NewAccount, ProfileUpdate};
pub use accounts_service::AccountService;
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};

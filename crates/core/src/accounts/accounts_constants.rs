//! Master-account seed identity.
//!
//! The directory ships with one pre-provisioned landlord so a fresh store is
//! immediately usable. The identity is fixed (including the id) so reseeding
//! an existing store never creates a second copy.

use super::accounts_model::{AccountRole, NewAccount};

pub const MASTER_ACCOUNT_ID: &str = "master-landlord-id";
pub const MASTER_FULL_NAME: &str = "Happy Home Owner";
pub const MASTER_PROPERTY_NAME: &str = "Happy Home";
pub const MASTER_MOBILE_NUMBER: &str = "01757317453";
pub const MASTER_PASSWORD: &str = "12345";

/// Registration input for the master landlord account.
pub fn master_account() -> NewAccount {
    NewAccount {
        id: Some(MASTER_ACCOUNT_ID.to_string()),
        full_name: MASTER_FULL_NAME.to_string(),
        property_name: Some(MASTER_PROPERTY_NAME.to_string()),
        role: AccountRole::Landlord,
        mobile_number: MASTER_MOBILE_NUMBER.to_string(),
        password: MASTER_PASSWORD.to_string(),
        profile_picture: None,
        property_owner_id: None,
    }
}

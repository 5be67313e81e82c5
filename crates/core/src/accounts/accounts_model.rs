//! Account domain models.

use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Role of an account - determines what the account can see and do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRole {
    /// Owns a property and the tenant accounts attached to it.
    Landlord,
    /// Pays rent; attached to exactly one landlord via `property_owner_id`.
    Tenant,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Landlord => "Landlord",
            AccountRole::Tenant => "Tenant",
        }
    }
}

/// Domain model representing an account in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub full_name: String,
    /// Display label of the landlord's building; not set for tenants.
    pub property_name: Option<String>,
    pub role: AccountRole,
    /// Login handle; unique across the directory.
    pub mobile_number: String,
    /// Compared exactly at login. Stored as entered - hashing is out of scope.
    pub password: String,
    /// Opaque image reference (the web client stored a data URL here).
    pub profile_picture: Option<String>,
    /// Id of the owning landlord; set for tenants only.
    pub property_owner_id: Option<String>,
}

impl Account {
    pub fn is_landlord(&self) -> bool {
        self.role == AccountRole::Landlord
    }

    pub fn is_tenant(&self) -> bool {
        self.role == AccountRole::Tenant
    }
}

/// Input model for registering a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    /// Preset id, used by the master-account seed. Normally left unset and
    /// assigned by the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub full_name: String,
    pub property_name: Option<String>,
    pub role: AccountRole,
    pub mobile_number: String,
    pub password: String,
    pub profile_picture: Option<String>,
    pub property_owner_id: Option<String>,
}

impl NewAccount {
    /// Validates the registration data.
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Full name cannot be empty".to_string(),
            )));
        }
        if self.mobile_number.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Mobile number cannot be empty".to_string(),
            )));
        }
        if self.password.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Password cannot be empty".to_string(),
            )));
        }
        if self.role == AccountRole::Tenant
            && self
                .property_owner_id
                .as_deref()
                .map_or(true, |id| id.trim().is_empty())
        {
            return Err(Error::Validation(ValidationError::MissingField(
                "propertyOwnerId".to_string(),
            )));
        }
        Ok(())
    }

    /// Builds the stored account once the repository has assigned an id.
    pub fn into_account(self, id: String) -> Account {
        Account {
            id,
            full_name: self.full_name,
            property_name: self.property_name,
            role: self.role,
            mobile_number: self.mobile_number,
            password: self.password,
            profile_picture: self.profile_picture,
            property_owner_id: self.property_owner_id,
        }
    }
}

/// Input model for editing an existing account's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub account_id: String,
    pub full_name: String,
    pub mobile_number: String,
}

impl ProfileUpdate {
    /// Validates the profile edit data.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account ID is required for profile updates".to_string(),
            )));
        }
        if self.full_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Full name cannot be empty".to_string(),
            )));
        }
        if self.mobile_number.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Mobile number cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

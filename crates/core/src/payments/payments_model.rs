//! Payment ledger domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::payments_constants::{RECEIPT_NUMBER_DIGITS, RECEIPT_NUMBER_PREFIX};
use crate::{errors::ValidationError, Error, Result};

/// Calendar month a rent payment covers, serialized as its English label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RentMonth {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl RentMonth {
    /// All twelve months in calendar order.
    pub const ALL: [RentMonth; 12] = [
        RentMonth::January,
        RentMonth::February,
        RentMonth::March,
        RentMonth::April,
        RentMonth::May,
        RentMonth::June,
        RentMonth::July,
        RentMonth::August,
        RentMonth::September,
        RentMonth::October,
        RentMonth::November,
        RentMonth::December,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RentMonth::January => "January",
            RentMonth::February => "February",
            RentMonth::March => "March",
            RentMonth::April => "April",
            RentMonth::May => "May",
            RentMonth::June => "June",
            RentMonth::July => "July",
            RentMonth::August => "August",
            RentMonth::September => "September",
            RentMonth::October => "October",
            RentMonth::November => "November",
            RentMonth::December => "December",
        }
    }
}

impl fmt::Display for RentMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a rent payment was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Bank,
    #[serde(rename = "MFS")]
    Mfs,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Bank => "Bank",
            PaymentMethod::Mfs => "MFS",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing one recorded rent payment.
///
/// Records are immutable once created and ordered most-recent-first in the
/// ledger. Tenant name and mobile number are denormalized at creation and
/// never re-synced with the account directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    /// Id of the paying tenant account.
    pub user_id: String,
    pub tenant_name: String,
    pub flat_number: String,
    pub mobile_number: String,
    pub rent_month: RentMonth,
    pub rent_amount: Decimal,
    /// Stamped when the record is created.
    pub payment_date: DateTime<Utc>,
    /// `REC-` + last digits of the creation millisecond epoch.
    pub receipt_number: String,
    pub payment_method: PaymentMethod,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub branch: Option<String>,
    pub mfs_number: Option<String>,
}

impl Payment {
    /// Human-readable settlement description used on receipts and in
    /// confirmation messages.
    pub fn settlement_phrase(&self) -> String {
        match self.payment_method {
            PaymentMethod::Bank => format!(
                "via {} ({})",
                self.bank_name.as_deref().unwrap_or("Bank"),
                self.branch.as_deref().unwrap_or("main branch")
            ),
            PaymentMethod::Mfs => {
                format!("via MFS ({})", self.mfs_number.as_deref().unwrap_or("-"))
            }
            PaymentMethod::Cash => "in Cash".to_string(),
        }
    }
}

/// Input model for recording a new payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub user_id: String,
    pub tenant_name: String,
    pub flat_number: String,
    pub mobile_number: String,
    pub rent_month: RentMonth,
    pub rent_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub branch: Option<String>,
    pub mfs_number: Option<String>,
}

impl NewPayment {
    /// Validates the payment data.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(super::PaymentError::MissingTenant.into());
        }
        if self.tenant_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "tenantName".to_string(),
            )));
        }
        if self.flat_number.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "flatNumber".to_string(),
            )));
        }
        if self.rent_amount.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Rent amount cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    /// Builds the stored record once the repository has assigned an id and
    /// stamped the creation instant.
    pub fn into_payment(self, id: String, at: DateTime<Utc>) -> Payment {
        Payment {
            id,
            user_id: self.user_id,
            tenant_name: self.tenant_name,
            flat_number: self.flat_number,
            mobile_number: self.mobile_number,
            rent_month: self.rent_month,
            rent_amount: self.rent_amount,
            payment_date: at,
            receipt_number: derive_receipt_number(at),
            payment_method: self.payment_method,
            bank_name: self.bank_name,
            account_number: self.account_number,
            branch: self.branch,
            mfs_number: self.mfs_number,
        }
    }
}

/// Derives a receipt number from the creation instant: the `REC-` prefix
/// followed by the last six digits of the millisecond epoch. Uniqueness is
/// probabilistic, which is fine at human entry rates.
pub fn derive_receipt_number(at: DateTime<Utc>) -> String {
    let millis = at.timestamp_millis().to_string();
    let tail_start = millis.len().saturating_sub(RECEIPT_NUMBER_DIGITS);
    format!("{}{}", RECEIPT_NUMBER_PREFIX, &millis[tail_start..])
}

/// Sums the rent amounts of a slice of records.
pub fn total_amount(payments: &[Payment]) -> Decimal {
    payments.iter().map(|payment| payment.rent_amount).sum()
}

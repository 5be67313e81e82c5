use log::debug;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;

use super::payments_errors::PaymentError;
use super::payments_model::{total_amount, NewPayment, Payment};
use super::payments_traits::{PaymentRepositoryTrait, PaymentServiceTrait};
use crate::accounts::{Account, AccountRole, AccountServiceTrait};
use crate::errors::Result;

/// Service for managing the payment ledger.
pub struct PaymentService {
    repository: Arc<dyn PaymentRepositoryTrait>,
    account_service: Arc<dyn AccountServiceTrait>,
}

impl PaymentService {
    /// Creates a new PaymentService instance
    pub fn new(
        repository: Arc<dyn PaymentRepositoryTrait>,
        account_service: Arc<dyn AccountServiceTrait>,
    ) -> Self {
        Self {
            repository,
            account_service,
        }
    }
}

#[async_trait::async_trait]
impl PaymentServiceTrait for PaymentService {
    /// Records a payment after the one-record-per-month check
    async fn record_payment(&self, new_payment: NewPayment) -> Result<Payment> {
        new_payment.validate()?;

        if self
            .repository
            .exists_for_month(&new_payment.user_id, new_payment.rent_month)?
        {
            return Err(PaymentError::DuplicatePaymentForMonth {
                month: new_payment.rent_month,
            }
            .into());
        }

        debug!(
            "Recording {} rent for tenant {}",
            new_payment.rent_month, new_payment.user_id
        );
        self.repository.create(new_payment).await
    }

    /// Lists the records visible to an account, most-recent-first
    fn list_for_account(&self, account: &Account) -> Result<Vec<Payment>> {
        match account.role {
            AccountRole::Tenant => self.repository.list_for_user(&account.id),
            AccountRole::Landlord => {
                let tenants = self.account_service.list_tenants_of(&account.id)?;
                let tenant_ids: HashSet<&str> =
                    tenants.iter().map(|tenant| tenant.id.as_str()).collect();
                let ledger = self.repository.list()?;
                Ok(ledger
                    .into_iter()
                    .filter(|payment| tenant_ids.contains(payment.user_id.as_str()))
                    .collect())
            }
        }
    }

    /// Retrieves a record by its ID
    fn get_payment(&self, payment_id: &str) -> Result<Payment> {
        self.repository.get_by_id(payment_id)
    }

    /// Sums the rent amounts of a slice of records
    fn total_for(&self, payments: &[Payment]) -> Decimal {
        total_amount(payments)
    }
}

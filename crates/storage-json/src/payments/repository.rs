use async_trait::async_trait;
use std::sync::Arc;

use rentfolio_core::errors::Result;
use rentfolio_core::payments::{
    NewPayment, Payment, PaymentError, PaymentRepositoryTrait, RentMonth,
};

use crate::store::JsonStore;

/// Repository for managing the payment ledger in the snapshot store.
///
/// New records are prepended, so storage order is the canonical
/// most-recent-first retrieval order.
pub struct PaymentRepository {
    store: Arc<JsonStore>,
}

impl PaymentRepository {
    /// Creates a new PaymentRepository instance
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PaymentRepositoryTrait for PaymentRepository {
    /// Persists a new record at the head of the ledger, stamping its id,
    /// payment date, and receipt number
    async fn create(&self, new_payment: NewPayment) -> Result<Payment> {
        new_payment.validate()?;

        let id = uuid::Uuid::new_v4().to_string();
        let payment = new_payment.into_payment(id, chrono::Utc::now());

        let created = self.store.mutate_payments(|payments| {
            payments.insert(0, payment.clone());
            payment
        })?;
        Ok(created)
    }

    /// Removes every record belonging to an account (tenant-deletion cascade)
    async fn delete_for_account(&self, user_id: &str) -> Result<usize> {
        let removed = self.store.mutate_payments(|payments| {
            let before = payments.len();
            payments.retain(|payment| payment.user_id != user_id);
            before - payments.len()
        })?;
        Ok(removed)
    }

    fn get_by_id(&self, payment_id: &str) -> Result<Payment> {
        self.store
            .with_payments(|payments| {
                payments
                    .iter()
                    .find(|payment| payment.id == payment_id)
                    .cloned()
            })
            .ok_or_else(|| PaymentError::NotFound(payment_id.to_string()).into())
    }

    fn list(&self) -> Result<Vec<Payment>> {
        Ok(self.store.with_payments(|payments| payments.to_vec()))
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Payment>> {
        Ok(self.store.with_payments(|payments| {
            payments
                .iter()
                .filter(|payment| payment.user_id == user_id)
                .cloned()
                .collect()
        }))
    }

    fn exists_for_month(&self, user_id: &str, month: RentMonth) -> Result<bool> {
        Ok(self.store.with_payments(|payments| {
            payments
                .iter()
                .any(|payment| payment.user_id == user_id && payment.rent_month == month)
        }))
    }
}

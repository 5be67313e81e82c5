//! Payment-confirmation drafting.
//!
//! Drafts a short SMS/WhatsApp confirmation for a recorded rent payment
//! using a fast model. Falls back to a fixed-format message built from the
//! record's own fields if drafting fails or times out.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use rig::{
    client::CompletionClient,
    completion::Prompt,
    providers::{gemini, openai},
};

use rentfolio_core::constants::APP_NAME;
use rentfolio_core::payments::Payment;

use crate::error::DraftError;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

// ============================================================================
// Message Drafter Trait
// ============================================================================

/// Trait for drafting payment-confirmation messages.
#[async_trait]
pub trait MessageDrafterTrait: Send + Sync {
    /// Draft a confirmation message for a recorded payment.
    ///
    /// Infallible: any drafting failure degrades to the deterministic
    /// fallback built from the record's local fields.
    async fn draft_confirmation(&self, payment: &Payment) -> String;
}

// ============================================================================
// Message Drafter Implementation
// ============================================================================

/// Configuration for message drafting.
pub struct DrafterConfig {
    /// Provider id ("gemini" unless overridden).
    pub provider_id: String,
    /// Model id used for drafting.
    pub model_id: String,
    /// API key for the provider, if configured.
    pub api_key: Option<String>,
    /// Fixed deadline for the provider call. Not configurable at runtime;
    /// elapsing it means falling back, never retrying.
    pub timeout: Duration,
}

impl Default for DrafterConfig {
    fn default() -> Self {
        Self {
            provider_id: "gemini".to_string(),
            model_id: "gemini-3-flash-preview".to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl DrafterConfig {
    /// Default configuration with the API key read from the environment.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(GEMINI_API_KEY_ENV).ok(),
            ..Self::default()
        }
    }
}

/// Message drafter implementation using LLM providers.
pub struct MessageDrafter {
    config: Arc<DrafterConfig>,
}

impl MessageDrafter {
    /// Create a new message drafter.
    pub fn new(config: DrafterConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Draft the message using the LLM, within the fixed deadline.
    async fn draft_with_llm(&self, payment: &Payment) -> Result<String, DraftError> {
        let prompt = build_prompt(payment);
        debug!(
            "Drafting confirmation with provider {} model {}",
            self.config.provider_id, self.config.model_id
        );

        let call = self.prompt_provider(&prompt);
        let response = tokio::time::timeout(self.config.timeout, call)
            .await
            .map_err(|_| DraftError::Timeout)??;

        let message = response.split_whitespace().collect::<Vec<_>>().join(" ");
        if message.is_empty() {
            return Err(DraftError::Internal("Drafted message was empty".into()));
        }
        Ok(message)
    }

    async fn prompt_provider(&self, prompt: &str) -> Result<String, DraftError> {
        let key = self
            .config
            .api_key
            .clone()
            .ok_or_else(|| DraftError::MissingApiKey(self.config.provider_id.clone()))?;

        match self.config.provider_id.as_str() {
            "gemini" | "google" => {
                let client: gemini::Client<HttpClient> = gemini::Client::new(&key)
                    .map_err(|e| DraftError::Provider(e.to_string()))?;
                client
                    .agent(&self.config.model_id)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| DraftError::Provider(e.to_string()))
            }
            _ => {
                // Default to OpenAI-compatible
                let client: openai::Client<HttpClient> = openai::Client::new(&key)
                    .map_err(|e| DraftError::Provider(e.to_string()))?;
                client
                    .agent(&self.config.model_id)
                    .build()
                    .prompt(prompt)
                    .await
                    .map_err(|e| DraftError::Provider(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl MessageDrafterTrait for MessageDrafter {
    async fn draft_confirmation(&self, payment: &Payment) -> String {
        // Fire once, fall back once - the drafting failure is the only
        // error in the system that is absorbed instead of surfaced.
        match self.draft_with_llm(payment).await {
            Ok(message) => message,
            Err(e) => {
                warn!("Message drafting failed, using fallback: {}", e);
                fallback_message(payment)
            }
        }
    }
}

fn build_prompt(payment: &Payment) -> String {
    format!(
        "Draft a very short, polite, and professional SMS/WhatsApp payment \
confirmation message for a tenant named {tenant} for the month of {month}.\n\
Details:\n\
- Flat: {flat}\n\
- Amount: \u{09f3}{amount}\n\
- Method: Received {settlement}\n\
- Receipt ID: {receipt}\n\
Keep it under 150 characters if possible. Mention that the payment was \
received via the {app} system.",
        tenant = payment.tenant_name,
        month = payment.rent_month,
        flat = payment.flat_number,
        amount = payment.rent_amount,
        settlement = payment.settlement_phrase(),
        receipt = payment.receipt_number,
        app = APP_NAME,
    )
}

/// Fixed-format confirmation built only from the record's local fields.
pub fn fallback_message(payment: &Payment) -> String {
    format!(
        "Hi {tenant}, thank you for the rent payment of \u{09f3}{amount} for {month} \
received {settlement}. Receipt: {receipt}. Sent via {app}.",
        tenant = payment.tenant_name,
        amount = payment.rent_amount,
        month = payment.rent_month,
        settlement = payment.settlement_phrase(),
        receipt = payment.receipt_number,
        app = APP_NAME,
    )
}

// ============================================================================
// Fake Drafter for Testing
// ============================================================================

/// A fake drafter for testing that never performs network I/O.
pub struct FakeMessageDrafter {
    /// Fixed message to return, or None to use the fallback.
    pub fixed_message: Option<String>,
}

impl FakeMessageDrafter {
    /// Create a fake drafter that returns a fixed message.
    pub fn with_message(message: &str) -> Self {
        Self {
            fixed_message: Some(message.to_string()),
        }
    }

    /// Create a fake drafter that always uses the fallback.
    pub fn with_fallback() -> Self {
        Self {
            fixed_message: None,
        }
    }
}

#[async_trait]
impl MessageDrafterTrait for FakeMessageDrafter {
    async fn draft_confirmation(&self, payment: &Payment) -> String {
        match &self.fixed_message {
            Some(message) => message.clone(),
            None => fallback_message(payment),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rentfolio_core::payments::{PaymentMethod, RentMonth};
    use rust_decimal_macros::dec;

    fn cash_payment() -> Payment {
        Payment {
            id: "payment-1".to_string(),
            user_id: "tenant-1".to_string(),
            tenant_name: "Karim".to_string(),
            flat_number: "A-2".to_string(),
            mobile_number: "01712345678".to_string(),
            rent_month: RentMonth::January,
            rent_amount: dec!(5000),
            payment_date: Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap(),
            receipt_number: "REC-123456".to_string(),
            payment_method: PaymentMethod::Cash,
            bank_name: None,
            account_number: None,
            branch: None,
            mfs_number: None,
        }
    }

    #[test]
    fn test_fallback_is_deterministic_and_complete() {
        let payment = cash_payment();
        let message = fallback_message(&payment);

        assert!(message.contains("Karim"));
        assert!(message.contains("5000"));
        assert!(message.contains("January"));
        assert!(message.contains("in Cash"));
        assert!(message.contains("REC-123456"));
        assert_eq!(message, fallback_message(&payment));
    }

    #[test]
    fn test_fallback_uses_bank_settlement_phrase() {
        let mut payment = cash_payment();
        payment.payment_method = PaymentMethod::Bank;
        payment.bank_name = Some("Sonali Bank Plc".to_string());
        payment.branch = Some("Madaripur".to_string());

        let message = fallback_message(&payment);
        assert!(message.contains("via Sonali Bank Plc (Madaripur)"));
    }

    #[test]
    fn test_prompt_names_record_fields() {
        let prompt = build_prompt(&cash_payment());
        assert!(prompt.contains("Karim"));
        assert!(prompt.contains("January"));
        assert!(prompt.contains("A-2"));
        assert!(prompt.contains("5000"));
        assert!(prompt.contains("REC-123456"));
    }

    #[tokio::test]
    async fn test_missing_api_key_falls_back() {
        let drafter = MessageDrafter::new(DrafterConfig::default());
        let message = drafter.draft_confirmation(&cash_payment()).await;
        assert_eq!(message, fallback_message(&cash_payment()));
    }

    #[tokio::test]
    async fn test_fake_drafter_fixed() {
        let drafter = FakeMessageDrafter::with_message("Payment received.");
        let message = drafter.draft_confirmation(&cash_payment()).await;
        assert_eq!(message, "Payment received.");
    }

    #[tokio::test]
    async fn test_fake_drafter_fallback() {
        let drafter = FakeMessageDrafter::with_fallback();
        let message = drafter.draft_confirmation(&cash_payment()).await;
        assert!(message.contains("REC-123456"));
    }
}

//! Drafting error types.
//!
//! These never escape `draft_confirmation`: every failure path ends in the
//! deterministic fallback message. They exist so the internal LLM call can
//! report what went wrong to the log.

use thiserror::Error;

/// Message-drafting errors.
#[derive(Debug, Error)]
pub enum DraftError {
    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (from rig-core or the API).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider did not answer within the fixed deadline.
    #[error("Drafting timed out")]
    Timeout,

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

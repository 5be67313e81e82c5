//! Confirmation-message drafting for Rentfolio.
//!
//! The one piece of the system that leaves the machine: after a rent
//! payment is recorded, a short confirmation message is drafted by an LLM.
//! The call is best-effort - any failure or timeout degrades to a
//! deterministic locally-templated message, and the error is logged rather
//! than surfaced.

pub mod drafter;
pub mod error;

pub use drafter::{
    fallback_message, DrafterConfig, FakeMessageDrafter, MessageDrafter, MessageDrafterTrait,
};
pub use error::DraftError;

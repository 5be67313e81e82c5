//! Session module - lifecycle state, scoping service, and traits.

mod session_model;
mod session_service;
mod session_traits;


pub use session_model::{AuthIntent, SessionState};
pub use session_service::SessionService;
pub use session_traits::{SessionRepositoryTrait, SessionServiceTrait};

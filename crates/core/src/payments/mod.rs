//! Payments module - domain models, services, and traits.

mod payments_constants;
mod payments_errors;
mod payments_model;
mod payments_service;
mod payments_traits;

#[cfg(test)]
mod payments_model_tests;


pub use payments_constants::*;
pub use payments_errors::PaymentError;
pub use payments_model::{
    derive_receipt_number, total_amount, NewPayment, Payment, PaymentMethod, RentMonth,
};
pub use payments_service::PaymentService;
pub use payments_traits::{PaymentRepositoryTrait, PaymentServiceTrait};

//! Session-pointer repository over the JSON snapshot store.

mod repository;

pub use repository::SessionRepository;

//! External facade: request/response mapping over the two domain services.
//!
//! In-process only; there is deliberately no network transport here. Callers
//! hand in request DTOs and get back JSON envelopes.

pub mod app;
pub mod dto;
pub mod envelope;

pub use app::WarehouseApp;

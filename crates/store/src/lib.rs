//! In-memory repository implementations.
//!
//! The sole storage backend for now. Domain services only see the repository
//! traits, so a persistent backend can be added without touching them.

pub mod in_memory;

pub use in_memory::{InMemoryOrderStore, InMemoryStockStore};

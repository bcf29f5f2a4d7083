//! Inventory domain module.
//!
//! This crate contains business rules for warehouse stock: inbound and
//! outbound processing against per-product stock records, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage backend).

pub mod ledger;
pub mod request;
pub mod stock;
pub mod turnover;

pub use ledger::{InventoryLedger, StockRepository};
pub use request::{InboundRequest, InboundStatus, OutboundRequest, OutboundStatus};
pub use stock::{DEFAULT_LOCATION, StockRecord};
pub use turnover::turnover_rate;

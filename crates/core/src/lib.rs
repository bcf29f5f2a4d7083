//! `wms-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult, RepositoryError};
pub use id::{CustomerId, IdSource, InboundId, OrderId, OutboundId, ProductCode, SequenceSource, UuidSource};
pub use value_object::ValueObject;

//! Order lifecycle domain module.
//!
//! Orders carry an item list, a derived total amount, and a finite status
//! machine. Pure domain logic; storage and transport live elsewhere.

pub mod order;
pub mod tracker;

pub use order::{Order, OrderItem, OrderStatus};
pub use tracker::{OrderLifecycleTracker, OrderRepository};

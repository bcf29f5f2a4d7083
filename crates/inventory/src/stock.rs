use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult, Entity, ProductCode};

/// Location assigned to records created by an inbound for a product the
/// ledger has never seen before.
pub const DEFAULT_LOCATION: &str = "A-01-01";

/// Per-product stock entry: quantity on hand plus its warehouse location.
///
/// Records are immutable snapshots. Every "mutation" returns a new record
/// with `updated_at` set by the operation; quantity is unsigned, so stock
/// cannot go negative by construction. Records are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    product: ProductCode,
    product_name: String,
    quantity: u32,
    location: String,
    updated_at: DateTime<Utc>,
}

impl StockRecord {
    pub fn new(
        product: ProductCode,
        product_name: impl Into<String>,
        quantity: u32,
        location: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            product,
            product_name: product_name.into(),
            quantity,
            location: location.into(),
            updated_at: at,
        }
    }

    pub fn product(&self) -> &ProductCode {
        &self.product
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Snapshot with `quantity` incremented by an inbound receipt.
    pub fn received(&self, quantity: u32, at: DateTime<Utc>) -> DomainResult<Self> {
        let total = self
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| DomainError::validation("stock quantity overflow"))?;
        Ok(Self {
            quantity: total,
            updated_at: at,
            ..self.clone()
        })
    }

    /// Snapshot with `quantity` decremented by an outbound draw.
    ///
    /// This is the sole enforcement point of the no-negative-stock invariant.
    pub fn released(&self, quantity: u32, at: DateTime<Utc>) -> DomainResult<Self> {
        if quantity > self.quantity {
            return Err(DomainError::insufficient_stock(quantity, self.quantity));
        }
        Ok(Self {
            quantity: self.quantity - quantity,
            updated_at: at,
            ..self.clone()
        })
    }
}

impl Entity for StockRecord {
    type Id = ProductCode;

    fn id(&self) -> &Self::Id {
        &self.product
    }
}

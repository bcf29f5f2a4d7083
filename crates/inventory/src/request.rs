use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wms_core::{Entity, InboundId, OutboundId, ProductCode};

/// Inbound request lifecycle.
///
/// `Received` is declared for wire compatibility with upstream systems but is
/// never produced here; the ledger drives Pending → Processed directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InboundStatus {
    Pending,
    Received,
    Processed,
}

/// Outbound request lifecycle.
///
/// `Picked` and `Packed` are declared for wire compatibility but never
/// produced here; the ledger drives Pending → Shipped directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutboundStatus {
    Pending,
    Picked,
    Packed,
    Shipped,
}

/// A unit of work representing goods entering the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundRequest {
    id: InboundId,
    product: ProductCode,
    product_name: String,
    quantity: u32,
    supplier: String,
    created_at: DateTime<Utc>,
    status: InboundStatus,
}

impl InboundRequest {
    pub fn new(
        id: InboundId,
        product: ProductCode,
        product_name: impl Into<String>,
        quantity: u32,
        supplier: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product,
            product_name: product_name.into(),
            quantity,
            supplier: supplier.into(),
            created_at,
            status: InboundStatus::Pending,
        }
    }

    pub fn request_id(&self) -> InboundId {
        self.id
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

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> InboundStatus {
        self.status
    }

    /// Snapshot marked Processed (successful application to the ledger).
    pub fn processed(self) -> Self {
        Self {
            status: InboundStatus::Processed,
            ..self
        }
    }
}

impl Entity for InboundRequest {
    type Id = InboundId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A unit of work representing goods leaving the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundRequest {
    id: OutboundId,
    product: ProductCode,
    product_name: String,
    quantity: u32,
    destination: String,
    created_at: DateTime<Utc>,
    status: OutboundStatus,
}

impl OutboundRequest {
    pub fn new(
        id: OutboundId,
        product: ProductCode,
        product_name: impl Into<String>,
        quantity: u32,
        destination: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product,
            product_name: product_name.into(),
            quantity,
            destination: destination.into(),
            created_at,
            status: OutboundStatus::Pending,
        }
    }

    pub fn request_id(&self) -> OutboundId {
        self.id
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

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> OutboundStatus {
        self.status
    }

    /// Snapshot marked Shipped (successful application to the ledger).
    pub fn shipped(self) -> Self {
        Self {
            status: OutboundStatus::Shipped,
            ..self
        }
    }
}

impl Entity for OutboundRequest {
    type Id = OutboundId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use wms_core::{IdSource, SequenceSource};

    #[test]
    fn inbound_starts_pending_and_marks_processed() {
        let ids = SequenceSource::new();
        let request = InboundRequest::new(
            InboundId::new(ids.next()),
            ProductCode::new("P001").unwrap(),
            "Widget",
            10,
            "ACME Supply",
            Utc::now(),
        );
        assert_eq!(request.status(), InboundStatus::Pending);
        assert_eq!(request.processed().status(), InboundStatus::Processed);
    }

    #[test]
    fn outbound_starts_pending_and_marks_shipped() {
        let request = OutboundRequest::new(
            OutboundId::new(Uuid::now_v7()),
            ProductCode::new("P001").unwrap(),
            "Widget",
            10,
            "Store 42",
            Utc::now(),
        );
        assert_eq!(request.status(), OutboundStatus::Pending);
        assert_eq!(request.shipped().status(), OutboundStatus::Shipped);
    }

    #[test]
    fn statuses_serialize_as_screaming_snake_case() {
        let json = serde_json::to_string(&InboundStatus::Processed).unwrap();
        assert_eq!(json, "\"PROCESSED\"");
        let json = serde_json::to_string(&OutboundStatus::Shipped).unwrap();
        assert_eq!(json, "\"SHIPPED\"");
    }
}

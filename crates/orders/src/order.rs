use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wms_core::{CustomerId, Entity, OrderId, ProductCode, ValueObject};

/// Order status lifecycle.
///
/// `Created` is the initial state. `Processing`, `Shipped` and `Delivered`
/// are declared for downstream fulfillment systems; no operation here drives
/// an order into them. `Cancelled` and `Delivered` are terminal sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Order line: product, quantity, unit price. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: ProductCode,
    pub product_name: String,
    pub quantity: u32,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
}

impl ValueObject for OrderItem {}

/// A customer order with its item list and derived total.
///
/// Snapshots are immutable: appending an item or moving through the status
/// machine returns a new instance with `updated_at` set by the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer: CustomerId,
    items: Vec<OrderItem>,
    total_amount: u64,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: OrderId, customer: CustomerId, at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer,
            items: Vec::new(),
            total_amount: 0,
            status: OrderStatus::Created,
            created_at: at,
            updated_at: at,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> CustomerId {
        self.customer
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Shipped and delivered orders are past the point of no return.
    pub fn is_cancellable(&self) -> bool {
        !matches!(self.status, OrderStatus::Shipped | OrderStatus::Delivered)
    }

    /// Snapshot with `item` appended and the total recomputed from scratch
    /// over the whole item list.
    pub fn with_item(mut self, item: OrderItem, at: DateTime<Utc>) -> Self {
        self.items.push(item);
        self.total_amount = self
            .items
            .iter()
            .map(|item| u64::from(item.quantity) * item.unit_price)
            .sum();
        self.updated_at = at;
        self
    }

    /// Created → Confirmed. Any other current status is a no-op: the order
    /// comes back unchanged, `updated_at` included.
    pub fn confirmed(self, at: DateTime<Utc>) -> Self {
        if self.status != OrderStatus::Created {
            return self;
        }
        Self {
            status: OrderStatus::Confirmed,
            updated_at: at,
            ..self
        }
    }

    /// Any status except Shipped or Delivered → Cancelled; no-op otherwise.
    ///
    /// Cancellation does not release any inventory; whether it should is an
    /// open product question tracked outside this module.
    pub fn cancelled(self, at: DateTime<Utc>) -> Self {
        if !self.is_cancellable() {
            return self;
        }
        Self {
            status: OrderStatus::Cancelled,
            updated_at: at,
            ..self
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn test_order() -> Order {
        Order::new(
            OrderId::new(Uuid::now_v7()),
            CustomerId::new(Uuid::now_v7()),
            Utc::now(),
        )
    }

    fn test_item(code: &str, quantity: u32, unit_price: u64) -> OrderItem {
        OrderItem {
            product: ProductCode::new(code).unwrap(),
            product_name: code.to_string(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn total_is_sum_of_price_times_quantity() {
        let at = Utc::now();
        let order = test_order()
            .with_item(test_item("P1", 2, 1000), at)
            .with_item(test_item("P2", 1, 500), at);

        // (2 × $10.00) + (1 × $5.00) = $25.00
        assert_eq!(order.total_amount(), 2500);
        assert_eq!(order.status(), OrderStatus::Created);
        assert_eq!(order.items().len(), 2);
    }

    #[test]
    fn empty_order_has_zero_total() {
        assert_eq!(test_order().total_amount(), 0);
    }

    #[test]
    fn confirm_moves_created_to_confirmed() {
        let order = test_order().confirmed(Utc::now());
        assert_eq!(order.status(), OrderStatus::Confirmed);
    }

    #[test]
    fn confirm_is_noop_for_cancelled_order() {
        let cancelled = test_order().cancelled(Utc::now());
        assert_eq!(cancelled.status(), OrderStatus::Cancelled);

        let updated_at = cancelled.updated_at();
        let after = cancelled.confirmed(Utc::now());
        assert_eq!(after.status(), OrderStatus::Cancelled);
        assert_eq!(after.updated_at(), updated_at);
    }

    #[test]
    fn confirmed_order_is_still_cancellable() {
        let order = test_order().confirmed(Utc::now()).cancelled(Utc::now());
        assert_eq!(order.status(), OrderStatus::Cancelled);
    }

    #[test]
    fn shipped_and_delivered_orders_cannot_be_cancelled() {
        // There is no operation that ships an order, so build the states
        // through serde to exercise the guard.
        let mut order = test_order();
        for status in [OrderStatus::Shipped, OrderStatus::Delivered] {
            let mut value = serde_json::to_value(&order).unwrap();
            value["status"] = serde_json::to_value(status).unwrap();
            order = serde_json::from_value(value).unwrap();

            assert!(!order.is_cancellable());
            let after = order.clone().cancelled(Utc::now());
            assert_eq!(after.status(), status);
        }
    }

    #[test]
    fn status_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Created).unwrap();
        assert_eq!(json, "\"CREATED\"");
    }
}

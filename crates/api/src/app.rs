use std::str::FromStr;
use std::sync::Arc;

use serde_json::{Value, json};

use wms_core::{
    Clock, CustomerId, DomainResult, IdSource, InboundId, OrderId, OutboundId, ProductCode,
    SystemClock, UuidSource,
};
use wms_inventory::{InboundRequest, InventoryLedger, OutboundRequest, turnover_rate};
use wms_orders::{OrderItem, OrderLifecycleTracker};
use wms_store::{InMemoryOrderStore, InMemoryStockStore};

use crate::dto::{
    InboundApplyRequest, OrderCreateRequest, OutboundApplyRequest, TurnoverRateQuery,
};
use crate::envelope::{failure, success};
use crate::dto;

/// In-process application facade.
///
/// Owns an inventory ledger and an order lifecycle tracker over in-memory
/// stores and exposes the external operations as envelope-producing calls.
/// The two services are independent; the facade is the only thing they share.
pub struct WarehouseApp {
    ledger: InventoryLedger<InMemoryStockStore>,
    tracker: OrderLifecycleTracker<InMemoryOrderStore>,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
}

impl WarehouseApp {
    pub fn new() -> Self {
        Self::with_capabilities(Arc::new(UuidSource), Arc::new(SystemClock))
    }

    /// Wire the facade with explicit id/time sources (deterministic in tests).
    pub fn with_capabilities(ids: Arc<dyn IdSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            ledger: InventoryLedger::new(InMemoryStockStore::new(), Arc::clone(&clock)),
            tracker: OrderLifecycleTracker::new(
                InMemoryOrderStore::new(),
                Arc::clone(&ids),
                Arc::clone(&clock),
            ),
            ids,
            clock,
        }
    }

    pub fn apply_inbound(&self, request: InboundApplyRequest) -> Value {
        self.envelope("inbound request processed", |app| {
            let product = ProductCode::from_str(&request.product_id)?;
            let inbound = InboundRequest::new(
                InboundId::new(app.ids.next()),
                product,
                request.product_name.as_str(),
                request.quantity,
                request.supplier.as_str(),
                app.clock.now(),
            );
            let processed = app.ledger.process_inbound(inbound)?;
            Ok(dto::inbound_to_json(&processed))
        })
    }

    pub fn apply_outbound(&self, request: OutboundApplyRequest) -> Value {
        self.envelope("outbound request processed", |app| {
            let product = ProductCode::from_str(&request.product_id)?;
            let outbound = OutboundRequest::new(
                OutboundId::new(app.ids.next()),
                product,
                request.product_name.as_str(),
                request.quantity,
                request.destination.as_str(),
                app.clock.now(),
            );
            let shipped = app.ledger.process_outbound(outbound)?;
            Ok(dto::outbound_to_json(&shipped))
        })
    }

    /// Inventory level by product id. Unknown products report zero stock.
    pub fn inventory_level(&self, product_id: &str) -> Value {
        self.envelope("inventory level", |app| {
            let product = ProductCode::from_str(product_id)?;
            let level = app.ledger.inventory_level(&product)?;
            Ok(json!({ "product_id": product.as_str(), "level": level }))
        })
    }

    pub fn turnover_rate(&self, query: TurnoverRateQuery) -> Value {
        let rate = turnover_rate(
            query.cost_of_goods_sold,
            query.beginning_inventory,
            query.ending_inventory,
        );
        success(json!({ "turnover_rate": rate }), "turnover rate computed")
    }

    pub fn create_order(&self, request: OrderCreateRequest) -> Value {
        self.envelope("order created", |app| {
            let customer = CustomerId::from_str(&request.customer_id)?;
            let items = request
                .items
                .iter()
                .map(|item| {
                    Ok(OrderItem {
                        product: ProductCode::from_str(&item.product_id)?,
                        product_name: item.product_name.clone(),
                        quantity: item.quantity,
                        unit_price: item.unit_price,
                    })
                })
                .collect::<DomainResult<Vec<_>>>()?;
            let order = app.tracker.create_order(customer, items)?;
            Ok(dto::order_to_json(&order))
        })
    }

    pub fn confirm_order(&self, order_id: &str) -> Value {
        self.envelope("order confirmed", |app| {
            let id = OrderId::from_str(order_id)?;
            let order = app.tracker.confirm_order(id)?;
            Ok(dto::order_to_json(&order))
        })
    }

    pub fn cancel_order(&self, order_id: &str) -> Value {
        self.envelope("order cancelled", |app| {
            let id = OrderId::from_str(order_id)?;
            let order = app.tracker.cancel_order(id)?;
            Ok(dto::order_to_json(&order))
        })
    }

    fn envelope(
        &self,
        message: &str,
        op: impl FnOnce(&Self) -> DomainResult<Value>,
    ) -> Value {
        match op(self) {
            Ok(data) => success(data, message),
            Err(err) => failure(&err),
        }
    }
}

impl Default for WarehouseApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use wms_core::{FixedClock, SequenceSource};

    use super::*;

    fn test_app() -> WarehouseApp {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        WarehouseApp::with_capabilities(Arc::new(SequenceSource::new()), Arc::new(FixedClock(at)))
    }

    fn inbound(quantity: u32) -> InboundApplyRequest {
        InboundApplyRequest {
            product_id: "P001".into(),
            product_name: "Widget".into(),
            quantity,
            supplier: "ACME Supply".into(),
        }
    }

    fn outbound(quantity: u32) -> OutboundApplyRequest {
        OutboundApplyRequest {
            product_id: "P001".into(),
            product_name: "Widget".into(),
            quantity,
            destination: "Store 42".into(),
        }
    }

    #[test]
    fn inbound_outbound_level_scenario() {
        let app = test_app();

        let envelope = app.apply_inbound(inbound(150));
        assert_eq!(envelope["code"], 200);
        assert_eq!(envelope["data"]["status"], "PROCESSED");

        let envelope = app.inventory_level("P001");
        assert_eq!(envelope["data"]["level"], 150);

        let envelope = app.apply_outbound(outbound(50));
        assert_eq!(envelope["code"], 200);
        assert_eq!(envelope["data"]["status"], "SHIPPED");
        assert_eq!(app.inventory_level("P001")["data"]["level"], 100);

        let envelope = app.apply_outbound(outbound(200));
        assert_eq!(envelope["error"]["code"], "INSUFFICIENT_STOCK");
        assert_eq!(envelope["error"]["details"]["available"], 100);
        assert_eq!(app.inventory_level("P001")["data"]["level"], 100);
    }

    #[test]
    fn unknown_product_reads_as_zero() {
        let app = test_app();
        let envelope = app.inventory_level("P404");
        assert_eq!(envelope["code"], 200);
        assert_eq!(envelope["data"]["level"], 0);
    }

    #[test]
    fn turnover_rate_query() {
        let app = test_app();
        let envelope = app.turnover_rate(TurnoverRateQuery {
            cost_of_goods_sold: 850_000.0,
            beginning_inventory: 100_000.0,
            ending_inventory: 150_000.0,
        });
        assert_eq!(envelope["data"]["turnover_rate"], 6.8);
    }

    #[test]
    fn order_lifecycle_round_trip() {
        let app = test_app();
        let customer = "00000000-0000-0000-0000-0000000000aa";

        let envelope = app.create_order(OrderCreateRequest {
            customer_id: customer.into(),
            items: vec![
                crate::dto::OrderItemRequest {
                    product_id: "P1".into(),
                    product_name: "Widget".into(),
                    quantity: 2,
                    unit_price: 1000,
                },
                crate::dto::OrderItemRequest {
                    product_id: "P2".into(),
                    product_name: "Gadget".into(),
                    quantity: 1,
                    unit_price: 500,
                },
            ],
        });
        assert_eq!(envelope["code"], 200);
        assert_eq!(envelope["data"]["total_amount"], 2500);
        assert_eq!(envelope["data"]["status"], "CREATED");

        let order_id = envelope["data"]["order_id"].as_str().unwrap().to_string();

        let envelope = app.confirm_order(&order_id);
        assert_eq!(envelope["data"]["status"], "CONFIRMED");

        let envelope = app.cancel_order(&order_id);
        assert_eq!(envelope["data"]["status"], "CANCELLED");

        // confirming a cancelled order is a no-op
        let envelope = app.confirm_order(&order_id);
        assert_eq!(envelope["data"]["status"], "CANCELLED");
    }

    #[test]
    fn malformed_ids_are_rejected() {
        let app = test_app();

        let envelope = app.confirm_order("not-a-uuid");
        assert_eq!(envelope["error"]["code"], "INVALID_ID");

        let envelope = app.inventory_level("   ");
        assert_eq!(envelope["error"]["code"], "INVALID_ID");
    }

    #[test]
    fn unknown_order_is_not_found() {
        let app = test_app();
        let envelope = app.confirm_order("00000000-0000-0000-0000-0000000000ff");
        assert_eq!(envelope["error"]["code"], "NOT_FOUND");
    }
}

use serde::Deserialize;
use serde_json::{Value, json};

use wms_inventory::{InboundRequest, OutboundRequest};
use wms_orders::Order;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct InboundApplyRequest {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub supplier: String,
}

#[derive(Debug, Deserialize)]
pub struct OutboundApplyRequest {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub destination: String,
}

#[derive(Debug, Deserialize)]
pub struct TurnoverRateQuery {
    pub cost_of_goods_sold: f64,
    pub beginning_inventory: f64,
    pub ending_inventory: f64,
}

#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
}

#[derive(Debug, Deserialize)]
pub struct OrderCreateRequest {
    pub customer_id: String,
    pub items: Vec<OrderItemRequest>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn inbound_to_json(request: &InboundRequest) -> Value {
    json!({
        "inbound_id": request.request_id().to_string(),
        "product_id": request.product().as_str(),
        "product_name": request.product_name(),
        "quantity": request.quantity(),
        "supplier": request.supplier(),
        "created_at": request.created_at().to_rfc3339(),
        "status": request.status(),
    })
}

pub fn outbound_to_json(request: &OutboundRequest) -> Value {
    json!({
        "outbound_id": request.request_id().to_string(),
        "product_id": request.product().as_str(),
        "product_name": request.product_name(),
        "quantity": request.quantity(),
        "destination": request.destination(),
        "created_at": request.created_at().to_rfc3339(),
        "status": request.status(),
    })
}

pub fn order_to_json(order: &Order) -> Value {
    let items: Vec<Value> = order
        .items()
        .iter()
        .map(|item| {
            json!({
                "product_id": item.product.as_str(),
                "product_name": item.product_name,
                "quantity": item.quantity,
                "unit_price": item.unit_price,
            })
        })
        .collect();

    json!({
        "order_id": order.order_id().to_string(),
        "customer_id": order.customer().to_string(),
        "items": items,
        "total_amount": order.total_amount(),
        "status": order.status(),
        "created_at": order.created_at().to_rfc3339(),
        "updated_at": order.updated_at().to_rfc3339(),
    })
}

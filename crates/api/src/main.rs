//! Demo binary: walks the facade through a small warehouse day.

use anyhow::Result;

use wms_api::WarehouseApp;
use wms_api::dto::{
    InboundApplyRequest, OrderCreateRequest, OrderItemRequest, OutboundApplyRequest,
    TurnoverRateQuery,
};

fn main() -> Result<()> {
    wms_observability::init();
    tracing::info!("warehouse facade wired over in-memory stores");

    let app = WarehouseApp::new();

    print_envelope(
        "inbound P001 x150",
        app.apply_inbound(InboundApplyRequest {
            product_id: "P001".into(),
            product_name: "Widget".into(),
            quantity: 150,
            supplier: "ACME Supply".into(),
        }),
    )?;

    print_envelope(
        "outbound P001 x50",
        app.apply_outbound(OutboundApplyRequest {
            product_id: "P001".into(),
            product_name: "Widget".into(),
            quantity: 50,
            destination: "Store 42".into(),
        }),
    )?;

    // over-draw: rejected, level untouched
    print_envelope(
        "outbound P001 x200",
        app.apply_outbound(OutboundApplyRequest {
            product_id: "P001".into(),
            product_name: "Widget".into(),
            quantity: 200,
            destination: "Store 42".into(),
        }),
    )?;

    print_envelope("level P001", app.inventory_level("P001"))?;

    print_envelope(
        "turnover rate",
        app.turnover_rate(TurnoverRateQuery {
            cost_of_goods_sold: 850_000.0,
            beginning_inventory: 100_000.0,
            ending_inventory: 150_000.0,
        }),
    )?;

    let created = app.create_order(OrderCreateRequest {
        customer_id: "018f3a5e-0000-7000-8000-000000000001".into(),
        items: vec![
            OrderItemRequest {
                product_id: "P001".into(),
                product_name: "Widget".into(),
                quantity: 2,
                unit_price: 1000,
            },
            OrderItemRequest {
                product_id: "P002".into(),
                product_name: "Gadget".into(),
                quantity: 1,
                unit_price: 500,
            },
        ],
    });
    print_envelope("create order", created.clone())?;

    if let Some(order_id) = created["data"]["order_id"].as_str() {
        print_envelope("confirm order", app.confirm_order(order_id))?;
        print_envelope("cancel order", app.cancel_order(order_id))?;
    }

    Ok(())
}

fn print_envelope(label: &str, envelope: serde_json::Value) -> Result<()> {
    println!("--- {label}");
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

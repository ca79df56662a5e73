//! Demo binary: places a few orders and logs the resulting statuses.

use modshop_app::Application;
use modshop_core::{LineItem, OrderId};
use modshop_order::PlaceOrder;

fn main() -> anyhow::Result<()> {
    modshop_observability::init();

    let app = Application::build();

    let scenarios = [
        ("O-1", vec![LineItem::new("P-1", 2)]),
        ("O-2", vec![LineItem::new("P-2", 0)]),
        ("O-3", vec![LineItem::new("P-1", 2_000)]),
        ("O-4", Vec::new()),
    ];

    for (order_id, items) in scenarios {
        let ack = app.order_service().place_order(PlaceOrder {
            order_id: OrderId::new(order_id),
            items,
        })?;

        // Dispatch is inline, so the status is already settled here.
        let status = app.status_of(&ack.order_id);
        tracing::info!(
            order_id = %ack.order_id,
            status = %serde_json::to_string(&status)?,
            "placement settled"
        );
    }

    Ok(())
}

//! Demo flow for the order lifecycle engine.
//!
//! Plays one service through end to end: the cashier submits a dine-in
//! order and a delivery order, the kitchen advances them, and a monitor
//! task polls for ready orders and announces them.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use comanda::lifecycle::{setup_tracing, OrderSystem};
use comanda::model::{MenuItemId, OrderCreate, OrderFilter, OrderLineDraft, OrderStatus};
use comanda::monitor::{CalloutPhase, ReadyNotifier};
use comanda::views::{ViewPoller, MONITOR_REFRESH};
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting order lifecycle demo");

    let system = OrderSystem::new();

    // Spawn the monitor display: poll ready orders, announce new ones.
    let monitor_client = system.order_client.clone();
    let monitor = tokio::spawn(async move {
        let mut poller = ViewPoller::new(
            monitor_client,
            OrderFilter::by_status(OrderStatus::Ready),
            MONITOR_REFRESH,
        );
        let mut notifier = ReadyNotifier::new();

        loop {
            let snapshot = match poller.next_snapshot().await {
                Ok(snapshot) => snapshot,
                Err(_) => break,
            };
            if let Some(announcement) = notifier.observe(&snapshot) {
                info!(
                    order_id = %announcement.order_id,
                    customer = %announcement.customer_name,
                    chime = announcement.sound.is_some(),
                    "ORDER READY"
                );
                // The callout clears on its own schedule; the poll loop
                // does not wait for it.
                let callout = announcement.callout;
                tokio::spawn(async move {
                    while callout.phase(Instant::now()) != CalloutPhase::Cleared {
                        sleep(Duration::from_millis(200)).await;
                    }
                    info!(order_id = %announcement.order_id, "Callout cleared");
                });
            }
        }
    });

    // Cashier: dine-in order for table 5.
    let burger = system
        .catalog
        .get(MenuItemId(1))
        .ok_or("menu item 1 missing")?
        .clone();
    let soda = system
        .catalog
        .get(MenuItemId(6))
        .ok_or("menu item 6 missing")?
        .clone();

    let dine_in = system
        .order_client
        .create_order(OrderCreate {
            lines: vec![
                OrderLineDraft::from_menu(&burger, 2, "No onions"),
                OrderLineDraft::from_menu(&soda, 2, "Cola"),
            ],
            customer_name: "Joana Silva".into(),
            customer_tax_id: Some("123.456.789-00".into()),
            is_delivery: false,
            delivery_address: None,
            table_number: Some(5),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %dine_in.id, total = dine_in.total, "Dine-in order placed");

    // Totem: delivery order.
    let shake = system
        .catalog
        .get(MenuItemId(8))
        .ok_or("menu item 8 missing")?
        .clone();
    let delivery = system
        .order_client
        .create_order(OrderCreate {
            lines: vec![OrderLineDraft::from_menu(&shake, 1, "")],
            customer_name: "Carlos Pereira".into(),
            customer_tax_id: None,
            is_delivery: true,
            delivery_address: Some("Flores St, 123".into()),
            table_number: None,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %delivery.id, total = delivery.total, "Delivery order placed");

    // Kitchen: advance the dine-in order to ready.
    for status in [OrderStatus::Preparing, OrderStatus::Ready] {
        sleep(Duration::from_millis(500)).await;
        system
            .order_client
            .update_status(dine_in.id, status)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Give the monitor a tick to pick it up and announce.
    sleep(MONITOR_REFRESH + Duration::from_millis(500)).await;

    // Cashier confirms the hand-off.
    system
        .order_client
        .update_status(dine_in.id, OrderStatus::Delivered)
        .await
        .map_err(|e| e.to_string())?;

    let delivered_today = system
        .order_client
        .orders_by_status(OrderStatus::Delivered)
        .await
        .map_err(|e| e.to_string())?;
    info!(count = delivered_today.len(), "Orders completed today");

    monitor.abort();
    system.shutdown().await?;
    Ok(())
}

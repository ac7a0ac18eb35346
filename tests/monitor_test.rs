//! Monitor notification behavior against a live order store.
//!
//! The notifier is driven with direct polls rather than a ticking
//! interval; the one-shot property depends only on the sequence of
//! snapshots, not on the cadence that produced them.

use comanda::clients::ActorClient;
use comanda::lifecycle::OrderSystem;
use comanda::model::{MenuItemId, OrderCreate, OrderFilter, OrderLineDraft, OrderStatus};
use comanda::monitor::ReadyNotifier;
use comanda::views::{ViewPoller, MONITOR_REFRESH};

fn order_for(system: &OrderSystem, customer: &str, table: u32) -> OrderCreate {
    let burger = system
        .catalog
        .get(MenuItemId(1))
        .expect("sample catalog has item 1")
        .clone();
    OrderCreate {
        lines: vec![OrderLineDraft::from_menu(&burger, 1, "")],
        customer_name: customer.into(),
        customer_tax_id: None,
        is_delivery: false,
        delivery_address: None,
        table_number: Some(table),
    }
}

async fn make_ready(system: &OrderSystem, params: OrderCreate) -> comanda::model::OrderId {
    let order = system.order_client.create_order(params).await.unwrap();
    system
        .order_client
        .update_status(order.id, OrderStatus::Preparing)
        .await
        .unwrap();
    system
        .order_client
        .update_status(order.id, OrderStatus::Ready)
        .await
        .unwrap();
    order.id
}

#[tokio::test]
async fn test_an_order_is_announced_in_exactly_one_tick() {
    let system = OrderSystem::new();
    let mut notifier = ReadyNotifier::new();
    let ready = OrderFilter::by_status(OrderStatus::Ready);

    // Tick 1: nothing ready yet.
    let snapshot = system.order_client.poll(ready.clone()).await.unwrap();
    assert!(notifier.observe(&snapshot).is_none());

    // Order becomes ready before tick 2.
    let id = make_ready(&system, order_for(&system, "Joana", 5)).await;

    let mut announced_ticks = 0;
    for _ in 0..5 {
        let snapshot = system.order_client.poll(ready.clone()).await.unwrap();
        if let Some(announcement) = notifier.observe(&snapshot) {
            assert_eq!(announcement.order_id, id);
            announced_ticks += 1;
        }
    }
    assert_eq!(announced_ticks, 1, "order must be announced in exactly one tick");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_two_orders_ready_in_one_interval_produce_one_announcement() {
    let system = OrderSystem::new();
    let mut notifier = ReadyNotifier::new();
    let ready = OrderFilter::by_status(OrderStatus::Ready);

    // Prime the notifier with an empty board.
    let snapshot = system.order_client.poll(ready.clone()).await.unwrap();
    notifier.observe(&snapshot);

    // Both orders turn ready between two monitor polls.
    let first = make_ready(&system, order_for(&system, "Joana", 5)).await;
    let second = make_ready(&system, order_for(&system, "Carlos", 8)).await;

    let snapshot = system.order_client.poll(ready.clone()).await.unwrap();
    let announcement = notifier.observe(&snapshot).expect("one announcement expected");
    assert_eq!(announcement.order_id, first, "policy picks the first in creation order");

    // The second order was absorbed as seen; no late announcement for it.
    let snapshot = system.order_client.poll(ready.clone()).await.unwrap();
    assert!(snapshot.items.iter().any(|o| o.id == second));
    assert!(notifier.observe(&snapshot).is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_announcement_never_precedes_ready_status() {
    let system = OrderSystem::new();
    let mut notifier = ReadyNotifier::new();
    let ready = OrderFilter::by_status(OrderStatus::Ready);

    let order = system
        .order_client
        .create_order(order_for(&system, "Joana", 5))
        .await
        .unwrap();
    system
        .order_client
        .update_status(order.id, OrderStatus::Preparing)
        .await
        .unwrap();

    // Still preparing: the ready snapshot is empty, nothing to announce.
    let snapshot = system.order_client.poll(ready.clone()).await.unwrap();
    assert!(snapshot.is_empty());
    assert!(notifier.observe(&snapshot).is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_view_poller_first_tick_resolves_immediately() {
    let system = OrderSystem::new();
    make_ready(&system, order_for(&system, "Joana", 5)).await;

    let mut poller = ViewPoller::new(
        system.order_client.clone(),
        OrderFilter::by_status(OrderStatus::Ready),
        MONITOR_REFRESH,
    );

    // A freshly opened display renders without waiting a full period.
    let snapshot = poller.next_snapshot().await.unwrap();
    assert_eq!(snapshot.len(), 1);

    // The poller holds a client clone; release it so the actor can exit.
    drop(poller);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_each_monitor_instance_announces_independently() {
    let system = OrderSystem::new();
    let ready = OrderFilter::by_status(OrderStatus::Ready);

    let mut left = ReadyNotifier::new();
    let mut right = ReadyNotifier::new();

    let id = make_ready(&system, order_for(&system, "Joana", 5)).await;

    let snapshot = system.order_client.poll(ready).await.unwrap();
    let left_announcement = left.observe(&snapshot).expect("left monitor announces");
    let right_announcement = right.observe(&snapshot).expect("right monitor announces");
    assert_eq!(left_announcement.order_id, id);
    assert_eq!(right_announcement.order_id, id);

    system.shutdown().await.unwrap();
}

//! Order-specific store logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::StoreActor;
use crate::model::{Order, OrderId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new order store actor and its client.
///
/// Order ids come from a monotonic counter starting at 1, so ascending id
/// order is creation order for the lifetime of the store.
pub fn new() -> (StoreActor<Order>, OrderClient) {
    let order_id_counter = Arc::new(AtomicU64::new(1));
    let next_order_id = move || OrderId(order_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = StoreActor::new(32, next_order_id);
    let client = OrderClient::new(generic_client);

    (actor, client)
}

//! The polling contract shared by every display.
//!
//! Each display (kitchen, cashier, delivery, monitor) owns its own refresh
//! cadence and re-fetches a fresh snapshot on every tick. The synchronizer
//! holds no last-seen state; diffing belongs to the caller (see
//! [`crate::monitor::ReadyNotifier`]). A push-based event stream could
//! replace this wholesale as long as the contract holds: each display gets
//! an eventually-consistent view that reflects every committed mutation.

use crate::clients::{ActorClient, OrderClient};
use crate::framework::Snapshot;
use crate::model::{Order, OrderFilter};
use crate::order_actor::OrderError;
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Refresh cadence of the kitchen display.
pub const KITCHEN_REFRESH: Duration = Duration::from_secs(5);
/// Refresh cadence of the cashier display.
pub const CASHIER_REFRESH: Duration = Duration::from_secs(5);
/// Refresh cadence of the delivery display.
pub const DELIVERY_REFRESH: Duration = Duration::from_secs(5);
/// Refresh cadence of the monitor display, tighter so ready orders are
/// announced promptly.
pub const MONITOR_REFRESH: Duration = Duration::from_secs(3);

/// A display's periodic view of the order store.
///
/// Owns the filter and the interval; every [`ViewPoller::next_snapshot`]
/// awaits the next tick, then takes a fresh snapshot. Independent pollers
/// are not synchronized with each other.
pub struct ViewPoller {
    client: OrderClient,
    filter: OrderFilter,
    interval: Interval,
}

impl ViewPoller {
    pub fn new(client: OrderClient, filter: OrderFilter, period: Duration) -> Self {
        let mut interval = interval(period);
        // A stalled display should not burst-fire missed ticks on resume.
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { client, filter, interval }
    }

    /// Waits for the next tick, then polls.
    ///
    /// The first call resolves immediately so a freshly opened display
    /// renders without waiting a full period.
    pub async fn next_snapshot(&mut self) -> Result<Snapshot<Order>, OrderError> {
        self.interval.tick().await;
        self.client.poll(self.filter.clone()).await
    }
}

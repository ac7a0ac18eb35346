//! Snapshot diffing for the monitor: announce each newly-ready order once.

use crate::framework::Snapshot;
use crate::model::{Order, OrderId};
use crate::monitor::alert::{AlertSound, Callout};
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{debug, info};

/// Everything a monitor needs to announce one order: who to call out,
/// the chime to play (absent while muted) and the overlay timing.
#[derive(Debug, Clone)]
pub struct Announcement {
    pub order_id: OrderId,
    pub customer_name: String,
    pub sound: Option<AlertSound>,
    pub callout: Callout,
}

/// Detects orders that turned ready between two consecutive polls.
///
/// Owns the `previous_ready` id set privately; construct one notifier per
/// monitor instance. The diff guarantees a one-shot announcement: an id
/// leaves the newly-ready set the instant it is absorbed into
/// `previous_ready`, so no order is ever announced twice, and since ids
/// only arrive through ready-status snapshots, no order is announced
/// before it is actually ready in the store.
#[derive(Debug)]
pub struct ReadyNotifier {
    previous_ready: BTreeSet<OrderId>,
    sound_enabled: bool,
}

impl ReadyNotifier {
    pub fn new() -> Self {
        Self { previous_ready: BTreeSet::new(), sound_enabled: true }
    }

    /// Digests one poll tick of the ready-status snapshot.
    ///
    /// At most one order is announced per tick: the first newly-ready
    /// order in creation order. Any others that turned ready in the same
    /// interval are absorbed silently — they stay on the ready board but
    /// never get their own chime. `previous_ready` is replaced
    /// unconditionally, announcement or not.
    pub fn observe(&mut self, snapshot: &Snapshot<Order>) -> Option<Announcement> {
        let current_ready: BTreeSet<OrderId> = snapshot.items.iter().map(|o| o.id).collect();

        // Snapshot items are in creation order, so the first unseen one
        // is the announcement policy's pick.
        let announcement = snapshot
            .items
            .iter()
            .find(|order| !self.previous_ready.contains(&order.id))
            .map(|order| {
                info!(order_id = %order.id, customer = %order.customer_name, "Newly ready");
                Announcement {
                    order_id: order.id,
                    customer_name: order.customer_name.clone(),
                    sound: self.sound_enabled.then(AlertSound::ready_chime),
                    callout: Callout::begin(Instant::now()),
                }
            });

        let absorbed = current_ready
            .iter()
            .filter(|id| !self.previous_ready.contains(*id))
            .count();
        if absorbed > 1 {
            debug!(absorbed = absorbed - 1, "Additional ready orders absorbed without alert");
        }

        self.previous_ready = current_ready;
        announcement
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Mute or unmute, locally to this monitor instance.
    ///
    /// Unmuting returns one test chime to play immediately, independent of
    /// the poll cycle.
    pub fn set_sound(&mut self, enabled: bool) -> Option<AlertSound> {
        let was_enabled = self.sound_enabled;
        self.sound_enabled = enabled;
        (enabled && !was_enabled).then(AlertSound::ready_chime)
    }

    /// Flips the mute toggle, returning the test chime when this unmutes.
    pub fn toggle_sound(&mut self) -> Option<AlertSound> {
        self.set_sound(!self.sound_enabled)
    }
}

impl Default for ReadyNotifier {
    fn default() -> Self {
        Self::new()
    }
}

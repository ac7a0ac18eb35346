//! The order aggregate and its status state machine.
//!
//! # Store Framework
//! [`Order`] implements the [`StoreEntity`](crate::framework::StoreEntity)
//! trait, allowing it to be managed by a [`StoreActor`](crate::framework::StoreActor).
//! The trait implementation (creation validation, transition rules, filter
//! matching) lives in [`crate::order_actor::entity`].

use crate::model::MenuItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
///
/// Ids are assigned monotonically by the order actor, so ascending id
/// order is creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of an order.
///
/// `Cancelled` is representable for the benefit of external systems, but
/// no transition in [`OrderStatus::can_become`] ever enters or leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The transition table enforced by the order actor.
    ///
    /// Only the forward path `Pending -> Preparing -> Ready -> Delivered`
    /// is legal; everything else (backward moves, skips, anything touching
    /// `Cancelled`) is rejected.
    pub fn can_become(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Preparing)
                | (OrderStatus::Preparing, OrderStatus::Ready)
                | (OrderStatus::Ready, OrderStatus::Delivered)
        )
    }

    /// Terminal states are kept for historical display and accept no
    /// further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{label}")
    }
}

/// How the order leaves the counter: eaten in-house at a table, or sent
/// out to a delivery address. Exactly one of the two, by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Fulfillment {
    DineIn { table: u32 },
    Delivery { address: String },
}

impl Fulfillment {
    pub fn is_delivery(&self) -> bool {
        matches!(self, Fulfillment::Delivery { .. })
    }
}

/// One menu item within an order.
///
/// `name` and `unit_price` are copied from the menu at order time;
/// later catalog edits never change historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// 1-based position within the order, unique per order.
    pub line_no: u32,
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub notes: String,
}

/// A customer's full request: line items, status, fulfillment mode, total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    /// Sum of `unit_price * quantity` over the lines, fixed at creation.
    pub total: f64,
    pub customer_name: String,
    /// Optional tax identifier printed on the receipt.
    pub customer_tax_id: Option<String>,
    pub fulfillment: Fulfillment,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn is_delivery(&self) -> bool {
        self.fulfillment.is_delivery()
    }
}

/// One line of an order submission, before the order exists.
///
/// Mirrors [`OrderLine`] minus the line number, which is assigned at
/// creation. Use [`OrderLineDraft::from_menu`] to denormalize name and
/// price from the catalog.
#[derive(Debug, Clone)]
pub struct OrderLineDraft {
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub notes: String,
}

impl OrderLineDraft {
    pub fn from_menu(item: &crate::model::MenuItem, quantity: u32, notes: impl Into<String>) -> Self {
        Self {
            menu_item_id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity,
            notes: notes.into(),
        }
    }
}

/// Payload for creating a new order, shaped the way the cashier and totem
/// submit it: a delivery flag plus optional table/address, validated into
/// a [`Fulfillment`] by the order actor.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub lines: Vec<OrderLineDraft>,
    pub customer_name: String,
    pub customer_tax_id: Option<String>,
    pub is_delivery: bool,
    pub delivery_address: Option<String>,
    pub table_number: Option<u32>,
}

/// Filter for snapshot reads: a status, optionally narrowed to one
/// fulfillment mode (used by the delivery and monitor displays).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFilter {
    pub status: OrderStatus,
    pub delivery: Option<bool>,
}

impl OrderFilter {
    pub fn by_status(status: OrderStatus) -> Self {
        Self { status, delivery: None }
    }

    pub fn by_status_and_mode(status: OrderStatus, is_delivery: bool) -> Self {
        Self { status, delivery: Some(is_delivery) }
    }
}

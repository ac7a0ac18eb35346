//! Entity trait implementation for the [`Order`] domain type.
//!
//! This is where the order store gets its semantics: submission
//! validation, the status transition table, and filter matching for
//! snapshot reads.

use crate::framework::StoreEntity;
use crate::model::{Fulfillment, Order, OrderCreate, OrderFilter, OrderId, OrderLine, OrderStatus};
use crate::order_actor::OrderError;
use chrono::Utc;

/// Builds and validates a full [`Order`] from a submission.
///
/// Validation rules:
/// - at least one line, every quantity >= 1
/// - customer name must not be blank
/// - delivery orders carry an address and no table number; dine-in orders
///   carry a table number and no address
///
/// On success the order is stamped `Pending` with `created_at == updated_at`
/// and its total computed from the lines.
pub fn build_order(id: OrderId, params: OrderCreate) -> Result<Order, OrderError> {
    if params.lines.is_empty() {
        return Err(OrderError::Validation("order has no lines".into()));
    }
    if let Some(line) = params.lines.iter().find(|l| l.quantity == 0) {
        return Err(OrderError::Validation(format!(
            "quantity for '{}' must be at least 1",
            line.name
        )));
    }
    if params.customer_name.trim().is_empty() {
        return Err(OrderError::Validation("customer name is required".into()));
    }

    let fulfillment = match (params.is_delivery, params.table_number, params.delivery_address) {
        (true, None, Some(address)) if !address.trim().is_empty() => {
            Fulfillment::Delivery { address }
        }
        (false, Some(table), None) => Fulfillment::DineIn { table },
        _ => {
            return Err(OrderError::Validation(
                "exactly one of table number or delivery address must be set".into(),
            ))
        }
    };

    let total = params
        .lines
        .iter()
        .map(|l| l.unit_price * f64::from(l.quantity))
        .sum();

    let lines = params
        .lines
        .into_iter()
        .zip(1u32..)
        .map(|(draft, line_no)| OrderLine {
            line_no,
            menu_item_id: draft.menu_item_id,
            name: draft.name,
            unit_price: draft.unit_price,
            quantity: draft.quantity,
            notes: draft.notes,
        })
        .collect();

    let now = Utc::now();
    Ok(Order {
        id,
        lines,
        status: OrderStatus::Pending,
        total,
        customer_name: params.customer_name,
        customer_tax_id: params.customer_tax_id,
        fulfillment,
        created_at: now,
        updated_at: now,
    })
}

impl StoreEntity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type Update = OrderStatus;
    type Filter = OrderFilter;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        build_order(id, params)
    }

    /// Applies a status transition, refreshing `updated_at`.
    ///
    /// Rejected transitions leave both the status and `updated_at` exactly
    /// as they were.
    fn apply_update(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_become(next) {
            return Err(OrderError::InvalidTransition { from: self.status, to: next });
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        self.status == filter.status
            && filter.delivery.map_or(true, |wants_delivery| self.is_delivery() == wants_delivery)
    }
}

//! Error types for the order actor.

use crate::framework::StoreError;
use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// All three domain variants are synchronous rejections of a single
/// operation; the store is left unchanged by any of them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order submission was malformed or incomplete.
    #[error("Invalid order: {0}")]
    Validation(String),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The requested status change is not permitted by the transition table.
    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<StoreError<OrderError>> for OrderError {
    fn from(e: StoreError<OrderError>) -> Self {
        match e {
            StoreError::Entity(e) => e,
            StoreError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunication(other.to_string()),
        }
    }
}

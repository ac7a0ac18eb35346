//! Orchestration layer: system startup, wiring and shutdown.

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use tracing::*;

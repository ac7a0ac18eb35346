//! # Observability & Tracing
//!
//! Structured logging for the whole engine, initialized once via
//! [`setup_tracing`].
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final store size
//! - **Store Operations**: Create, Get, Update and List, with entity ids
//!   and rejection reasons
//! - **Monitor**: newly-ready detections and absorbed orders
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The compact
//! format hides module paths (`with_target(false)`); the `entity_type`
//! field identifies the actor instead.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads at function entry points
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, clients log the full payload **once** at the
//! start of each request:
//!
//! ```rust,ignore
//! debug!(?params, "create_order called");
//! ```
//!
//! The `?` syntax records the variable through its `Debug` representation
//! as a structured field. A typical order flow at `info` level:
//!
//! ```text
//! INFO Store actor started entity_type="Order"
//! INFO Created entity_type="Order" id=1 size=1
//! INFO Updated entity_type="Order" id=1
//! INFO Newly ready order_id=1 customer="Joana"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - entity_type identifies the actor
        .compact()
        .init();
}

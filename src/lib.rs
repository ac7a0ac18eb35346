//! # Comanda
//!
//! > **The order lifecycle engine behind a small food-service POS.**
//!
//! Customers and cashiers place orders, kitchen staff advance them through
//! preparation, and delivery/monitor screens observe readiness. This crate
//! is the part with real invariants: the shared order store, its status
//! state machine, the polling contract every display uses, and the
//! monitor's change-detection subsystem that announces each newly-ready
//! order exactly once. Rendering, cart handling and page layout are
//! collaborator concerns that sit on top of the four operations exposed
//! here.
//!
//! ## 🏗️ Design Philosophy
//!
//! The engine is built as a resource-oriented actor: one Tokio task owns
//! every order and processes requests sequentially, so the store needs no
//! locks, writes are mutually exclusive by construction, and every read is
//! an atomic snapshot taken at a single instant. Displays never share
//! mutable state — each poll returns independent copies.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic store actor: [`StoreEntity`](framework::StoreEntity),
//! [`StoreActor`](framework::StoreActor), [`StoreClient`](framework::StoreClient)
//! and the [`Snapshot`](framework::Snapshot) type every display consumes.
//! - **Role**: separates the *business logic* (the entity) from the
//!   *plumbing* (channels, message loop, error mapping).
//!
//! ### 2. The Domain ([`model`], [`catalog`], [`order_actor`])
//! Orders, menu data and the status state machine.
//! - **Key items**: [`Order`](model::Order), [`OrderStatus`](model::OrderStatus)
//!   (`pending → preparing → ready → delivered`), [`Catalog`](catalog::Catalog).
//!
//! ### 3. The Interface ([`clients`], [`views`])
//! Raw message passing stays hidden behind [`OrderClient`](clients::OrderClient),
//! which exposes the collaborator operations: create an order, advance its
//! status, list by status (and fulfillment mode), poll a snapshot.
//! [`views`] adds the per-display refresh cadences and the
//! [`ViewPoller`](views::ViewPoller).
//!
//! ### 4. The Monitor ([`monitor`])
//! Snapshot diffing and alerting: [`ReadyNotifier`](monitor::ReadyNotifier)
//! announces each newly-ready order once — a three-tone chime plus a timed
//! callout overlay — and owns its own mute toggle.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`OrderSystem`](lifecycle::OrderSystem) spins up the actor, hands out
//! clients and shuts everything down gracefully.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo flow with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod monitor;
pub mod order_actor;
pub mod views;

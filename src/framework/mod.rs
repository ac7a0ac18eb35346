//! Generic actor framework for the shared store.
//!
//! This module provides the building blocks for a type-safe store actor
//! that owns all mutable state and serves filtered snapshot reads.
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait that stored resource types implement
//! - [`StoreActor`] - Generic actor that owns the entities
//! - [`StoreClient`] - Type-safe handle for talking to the actor
//! - [`Snapshot`] - Timestamped, atomically-taken batch of entity copies
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;

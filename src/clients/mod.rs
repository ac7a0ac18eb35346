//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient).

pub mod actor_client;
pub mod order_client;

pub use actor_client::*;
pub use order_client::*;

use crate::catalog::Catalog;
use crate::clients::OrderClient;
use crate::order_actor;
use tracing::{error, info};

/// The runtime orchestrator for the order lifecycle engine.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: starting the store actor and shutting it down
/// - **Dependency Wiring**: handing the order client and catalog to every
///   display collaborator, instead of anything reaching for ambient globals
///
/// # Architecture
///
/// One store actor owns every order; all displays share clones of
/// [`OrderClient`]. The catalog is plain read-only data carried alongside.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let order = system.order_client.create_order(params).await?;
/// system.order_client.update_status(order.id, OrderStatus::Preparing).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for the order store actor; clone one per display.
    pub order_client: OrderClient,

    /// Read-only menu for this session.
    pub catalog: Catalog,

    /// Task handle of the running store actor (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Creates and initializes a new `OrderSystem` with the house menu.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::sample())
    }

    /// Creates the system with a custom menu.
    ///
    /// Spawns the order store actor in its own task and wires up the
    /// monotonic id generator.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let (order_actor, order_client) = order_actor::new();
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            order_client,
            catalog,
            handles: vec![order_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the held client, which closes the actor's channel once every
    /// display clone is gone too, then waits for the actor task to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

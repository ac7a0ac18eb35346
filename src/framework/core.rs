//! # Core Store Framework
//!
//! This module defines the generic building blocks for the shared store.
//!
//! ## Key Types
//!
//! - [`StoreEntity`]: The trait that stored resource types must implement.
//! - [`StoreActor`]: The generic actor that owns the entities.
//! - [`StoreClient`]: The generic client for communicating with the actor.
//! - [`StoreError`]: Channel-level errors plus the entity's own error type.
//! - [`Snapshot`]: A timestamped, atomically-taken batch of entity copies.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any resource entity must implement to be managed by a
/// [`StoreActor`].
///
/// # Architecture Note
/// By defining a contract that every stored type satisfies, the actor loop
/// is written *once* and reused for any entity. Associated types keep the
/// operations fully typed: an order store only accepts order payloads, and
/// the compiler rejects everything else.
///
/// All hooks are synchronous. Nothing a store entity does is I/O-bound;
/// each hook either completes or rejects the single operation that invoked
/// it, leaving the entity untouched on error.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. `Ord` because the store keeps entities sorted by
    /// id, which doubles as creation order when ids are monotonic.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// The payload required to create a new instance.
    type CreateParams: Send + Sync + Debug;

    /// The payload applied to an existing instance by `Update`.
    type Update: Send + Sync + Debug;

    /// Predicate payload for snapshot reads.
    type Filter: Send + Sync + Debug;

    /// The entity's own error type, surfaced through [`StoreError::Entity`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct and validate the full entity from the id and payload.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    /// Apply an update in place.
    ///
    /// Implementations must validate before mutating: on `Err` the entity
    /// must be exactly as it was before the call.
    fn apply_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Whether this entity belongs in a snapshot for `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur when talking to a store actor.
///
/// Channel failures and missing ids are reported here; everything the
/// entity itself rejects arrives as [`StoreError::Entity`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError<E: std::error::Error> {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Entity(E),
}

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T, E> = oneshot::Sender<Result<T, StoreError<E>>>;

/// An immutable, timestamped batch of entity copies.
///
/// Produced by the `List` operation inside the actor loop, so the items
/// reflect the store at one single instant: no read ever observes a write
/// half-applied across entities.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub taken_at: DateTime<Utc>,
    /// Entity copies in ascending id order.
    pub items: Vec<T>,
}

impl<T> Snapshot<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Internal message type sent to the actor to request operations.
///
/// The variants are the whole write/read surface of a store:
///
/// - **Create**: lifecycle start, validated by
///   [`StoreEntity::from_create_params`]. Replies with a copy of the
///   created entity.
/// - **Get**: single-entity lookup by id.
/// - **Update**: the only mutation after creation, validated by
///   [`StoreEntity::apply_update`]. Replies with a copy of the updated
///   entity.
/// - **List**: filtered snapshot read, the polling contract every display
///   builds on.
///
/// There is deliberately no `Delete`: entities in terminal states are
/// retained for historical display.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T, T::Error>,
    },
    List {
        filter: T::Filter,
        respond_to: Response<Snapshot<T>, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a collection of entities.
///
/// # Concurrency Model
/// The actor processes its messages *sequentially* in a loop, so the store
/// needs no `Mutex`: writes are mutually exclusive with each other and
/// with reads by construction, and every `List` reply is an atomic
/// snapshot. The actor task is the single linearization point for all
/// mutations of its entity type.
///
/// The store is a `BTreeMap`, so iteration yields entities in ascending
/// id order — creation order, given a monotonic id generator.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: StoreEntity> StoreActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client
    /// has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "comanda::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(StoreError::Entity(e)));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Update { id, update, respond_to } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        match item.apply_update(update) {
                            Ok(()) => {
                                info!(entity_type, %id, "Updated");
                                let _ = respond_to.send(Ok(item.clone()));
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "Update rejected");
                                let _ = respond_to.send(Err(StoreError::Entity(e)));
                            }
                        }
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::List { filter, respond_to } => {
                    let snapshot = Snapshot {
                        taken_at: Utc::now(),
                        items: self
                            .store
                            .values()
                            .filter(|item| item.matches(&filter))
                            .cloned()
                            .collect::<Vec<_>>(),
                    };
                    debug!(entity_type, ?filter, matched = snapshot.len(), "List");
                    let _ = respond_to.send(Ok(snapshot));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`StoreActor`].
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, StoreError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { params, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update { id, update, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn list(&self, filter: T::Filter) -> Result<Snapshot<T>, StoreError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { filter, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: u64,
        label: String,
        open: bool,
    }

    #[derive(Debug)]
    struct TicketCreate {
        label: String,
    }

    #[derive(Debug)]
    enum TicketUpdate {
        Close,
    }

    #[derive(Debug)]
    struct OpenOnly;

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum TicketError {
        #[error("label must not be empty")]
        EmptyLabel,
        #[error("ticket already closed")]
        AlreadyClosed,
    }

    impl StoreEntity for Ticket {
        type Id = u64;
        type CreateParams = TicketCreate;
        type Update = TicketUpdate;
        type Filter = OpenOnly;
        type Error = TicketError;

        fn from_create_params(id: u64, params: TicketCreate) -> Result<Self, TicketError> {
            if params.label.is_empty() {
                return Err(TicketError::EmptyLabel);
            }
            Ok(Self { id, label: params.label, open: true })
        }

        fn apply_update(&mut self, update: TicketUpdate) -> Result<(), TicketError> {
            match update {
                TicketUpdate::Close => {
                    if !self.open {
                        return Err(TicketError::AlreadyClosed);
                    }
                    self.open = false;
                    Ok(())
                }
            }
        }

        fn matches(&self, _filter: &OpenOnly) -> bool {
            self.open
        }
    }

    fn spawn_ticket_actor() -> StoreClient<Ticket> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || counter.fetch_add(1, Ordering::SeqCst);
        let (actor, client) = StoreActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_store_actor_crud_cycle() {
        let client = spawn_ticket_actor();

        // Create
        let ticket = client
            .create(TicketCreate { label: "table 4".into() })
            .await
            .unwrap();
        assert_eq!(ticket.id, 1);
        assert!(ticket.open);

        // Get
        let fetched = client.get(ticket.id).await.unwrap().unwrap();
        assert_eq!(fetched, ticket);

        // Update
        let closed = client.update(ticket.id, TicketUpdate::Close).await.unwrap();
        assert!(!closed.open);

        // Update again is rejected, entity untouched
        let err = client.update(ticket.id, TicketUpdate::Close).await.unwrap_err();
        assert_eq!(err, StoreError::Entity(TicketError::AlreadyClosed));
        let fetched = client.get(ticket.id).await.unwrap().unwrap();
        assert!(!fetched.open);
    }

    #[tokio::test]
    async fn test_create_validation_leaves_store_empty() {
        let client = spawn_ticket_actor();

        let err = client.create(TicketCreate { label: String::new() }).await.unwrap_err();
        assert_eq!(err, StoreError::Entity(TicketError::EmptyLabel));

        let snapshot = client.list(OpenOnly).await.unwrap();
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_and_orders_by_id() {
        let client = spawn_ticket_actor();

        for label in ["a", "b", "c"] {
            client.create(TicketCreate { label: label.into() }).await.unwrap();
        }
        client.update(2, TicketUpdate::Close).await.unwrap();

        let snapshot = client.list(OpenOnly).await.unwrap();
        let ids: Vec<u64> = snapshot.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let client = spawn_ticket_actor();

        let err = client.update(99, TicketUpdate::Close).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("99".to_string()));
    }
}

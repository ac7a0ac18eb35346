use crate::framework::{Snapshot, StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read
/// operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// `get` and `poll`, with errors mapped into the resource's own type.
#[async_trait]
pub trait ActorClient<T: StoreEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<StoreError<T::Error>> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Fetch an entity copy by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::Error::from)
    }

    /// Take a fresh snapshot of the entities matching `filter`.
    ///
    /// This is the polling contract every display builds on: the snapshot
    /// is taken atomically inside the actor loop and reflects every write
    /// that completed before the read began.
    #[tracing::instrument(skip(self))]
    async fn poll(&self, filter: T::Filter) -> Result<Snapshot<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(filter).await.map_err(Self::Error::from)
    }
}

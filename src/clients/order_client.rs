use crate::clients::actor_client::ActorClient;
use crate::framework::StoreClient;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderStatus};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the order store actor.
///
/// This is the collaborator-facing surface of the core: the cashier and
/// totem submit orders through it, the kitchen and delivery displays
/// advance statuses, and every display polls it for snapshots.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Submits a new order.
    ///
    /// Validation happens in the order entity; on success the returned
    /// order is a full copy with its assigned id, computed total and
    /// `Pending` status.
    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        self.inner.create(params).await.map_err(OrderError::from)
    }

    /// Advances an order through the status state machine.
    ///
    /// Fails with [`OrderError::NotFound`] for unknown ids and
    /// [`OrderError::InvalidTransition`] for any pair outside the
    /// transition table, leaving the stored order untouched.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("update_status called");
        self.inner.update(id, status).await.map_err(OrderError::from)
    }

    /// All orders with the given status, in creation order.
    pub async fn orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        Ok(self.poll(OrderFilter::by_status(status)).await?.items)
    }

    /// Orders with the given status, narrowed to one fulfillment mode.
    /// Used by the delivery and monitor displays.
    pub async fn orders_by_status_and_mode(
        &self,
        status: OrderStatus,
        is_delivery: bool,
    ) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .poll(OrderFilter::by_status_and_mode(status, is_delivery))
            .await?
            .items)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::StoreError;

    #[tokio::test]
    async fn test_not_found_maps_to_order_error() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_update(OrderId(7))
            .return_err(StoreError::NotFound("7".to_string()));

        let client = OrderClient::new(mock.client());
        let err = client
            .update_status(OrderId(7), OrderStatus::Preparing)
            .await
            .unwrap_err();

        assert_eq!(err, OrderError::NotFound("7".to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_pass_through_untouched() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_update(OrderId(3)).return_err(StoreError::Entity(
            OrderError::InvalidTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Ready,
            },
        ));

        let client = OrderClient::new(mock.client());
        let err = client
            .update_status(OrderId(3), OrderStatus::Ready)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            OrderError::InvalidTransition { from: OrderStatus::Pending, to: OrderStatus::Ready }
        );
        mock.verify();
    }
}

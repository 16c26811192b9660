use std::sync::Arc;
use std::time::Duration;

use super::error::OrderError;
use crate::context::CallContext;
use crate::model::{NewOrder, Order, OrderView};
use crate::peer::UserLookup;
use crate::store::RecordStore;

/// Ceiling on each user-service call made on behalf of one request.
pub const DEFAULT_PEER_TIMEOUT: Duration = Duration::from_secs(3);

/// Order registry backed by a local store and a remote user lookup.
#[derive(Clone)]
pub struct OrderService {
    store: RecordStore<Order>,
    users: Arc<dyn UserLookup>,
    peer_timeout: Duration,
}

impl OrderService {
    pub fn new(store: RecordStore<Order>, users: Arc<dyn UserLookup>) -> Self {
        Self {
            store,
            users,
            peer_timeout: DEFAULT_PEER_TIMEOUT,
        }
    }

    /// Override the per-call ceiling applied to user lookups.
    pub fn with_peer_timeout(mut self, peer_timeout: Duration) -> Self {
        self.peer_timeout = peer_timeout;
        self
    }

    pub fn store(&self) -> &RecordStore<Order> {
        &self.store
    }

    pub fn peer_timeout(&self) -> Duration {
        self.peer_timeout
    }

    /// All stored orders, without user details.
    pub fn list_orders(&self) -> Vec<Order> {
        self.store.list()
    }

    /// Fetch one order and, if the user service can provide it, its owner.
    ///
    /// Lookup failures of any kind are logged and yield the bare order.
    pub async fn fetch_order(&self, ctx: &CallContext, id: u64) -> Result<OrderView, OrderError> {
        let order = self.store.get(id).ok_or(OrderError::NotFound(id))?;

        let peer_ctx = ctx.child_with_timeout(self.peer_timeout);
        match self.users.fetch_user(&peer_ctx, order.user_id).await {
            Ok(user) => Ok(OrderView::enriched(order, user)),
            Err(err) => {
                tracing::warn!(
                    order_id = id,
                    user_id = order.user_id,
                    not_found = err.is_not_found(),
                    error = %err,
                    "serving order without user details"
                );
                Ok(OrderView::bare(order))
            }
        }
    }

    /// Create an order once the user service confirms its owner exists.
    pub async fn create_order(&self, ctx: &CallContext, input: NewOrder) -> Result<Order, OrderError> {
        let order = Order::from(input);

        let peer_ctx = ctx.child_with_timeout(self.peer_timeout);
        if let Err(err) = self.users.fetch_user(&peer_ctx, order.user_id).await {
            tracing::info!(user_id = order.user_id, error = %err, "rejecting order");
            return Err(OrderError::UserUnverified(err));
        }

        Ok(self.store.create(order))
    }
}

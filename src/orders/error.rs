//! Error types for order operations.

use crate::peer::PeerError;

/// Error type for [`OrderService`](super::OrderService) operations.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// No order with this id exists in the local store.
    #[error("order not found")]
    NotFound(u64),
    /// The owning user could not be confirmed, so the order was not created.
    #[error("user not found or service unavailable: {0}")]
    UserUnverified(#[source] PeerError),
}

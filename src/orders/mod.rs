//! Order registry operations that consult the user service.
//!
//! Reads and writes use the same [`UserLookup`](crate::peer::UserLookup) with
//! opposite failure policies:
//!
//! - fetching an order attaches the owner when the lookup succeeds and
//!   returns the bare order when it does not;
//! - creating an order requires the lookup to succeed.

mod error;
mod service;

pub use error::OrderError;
pub use service::{OrderService, DEFAULT_PEER_TIMEOUT};

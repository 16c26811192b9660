//! Peer client - fetches users from a remote user service.
//!
//! The order service depends on [`UserLookup`] rather than on the HTTP client
//! directly, so the same lookup can be served by [`UserClient`] in production
//! and by an in-process stub in tests.

mod client;
mod error;

use async_trait::async_trait;

use crate::context::CallContext;
use crate::model::User;

pub use client::UserClient;
pub use error::PeerError;

/// Something that can resolve a user id to the user's current details.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Fetch the user with `id`, abandoning the call if `ctx` is cancelled or
    /// its deadline passes.
    async fn fetch_user(&self, ctx: &CallContext, id: u64) -> Result<User, PeerError>;
}

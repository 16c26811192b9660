//! User and order registries that talk to each other over HTTP.
//!
//! The user service stores users. The order service stores orders and asks
//! the user service about each order's owner: when showing an order it adds
//! the owner's details if it can, and when creating one it refuses unless
//! the owner is confirmed.

pub mod config;
pub mod context;
pub mod http;
pub mod model;
pub mod orders;
pub mod peer;
pub mod server;
pub mod store;
pub mod telemetry;

pub use context::{CallContext, Interrupted};
pub use model::{NewOrder, NewUser, Order, OrderView, User};
pub use orders::{OrderError, OrderService};
pub use peer::{PeerError, UserClient, UserLookup};
pub use store::{Record, RecordStore};

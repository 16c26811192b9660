//! HTTP transport for both services. Uses axum for routing.
//!
//! ## Routes
//!
//! User service:
//! - `GET /users`, `POST /users`, `GET /users/:id`
//!
//! Order service:
//! - `GET /orders`, `POST /orders`, `GET /orders/:id`
//!
//! Both:
//! - `GET /health` - plain `OK`.
//!
//! Other methods on these paths get 405. An empty id (`/users/`) is a bad
//! id and gets 400. Error bodies, 405 included, are `{ "error": "<message>" }`.
//!
//! ## Example
//!
//! ```ignore
//! let app = http::user_router(RecordStore::with_records(user_fixtures()), Duration::from_secs(30));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8081").await?;
//! axum::serve(listener, app).await?;
//! ```

mod error;
mod middleware;
mod orders;
mod users;

use std::time::Duration;

use axum::Router;

use crate::model::User;
use crate::orders::OrderService;
use crate::store::RecordStore;

pub use error::ApiError;
pub use middleware::{request_context, RequestTimeout};
pub use orders::order_routes;
pub use users::user_routes;

/// The complete user service app.
pub fn user_router(store: RecordStore<User>, request_timeout: Duration) -> Router {
    with_request_context(user_routes(store), request_timeout)
}

/// The complete order service app.
pub fn order_router(service: OrderService, request_timeout: Duration) -> Router {
    with_request_context(order_routes(service), request_timeout)
}

fn with_request_context(routes: Router, request_timeout: Duration) -> Router {
    routes.layer(axum::middleware::from_fn_with_state(
        RequestTimeout(request_timeout),
        request_context,
    ))
}

/// `GET /health` - plain `OK`.
async fn health_handler() -> &'static str {
    "OK"
}

/// Fallback for methods a route does not serve.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

//! Routes of the order service.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Json, Router};

use super::error::{parse_id, ApiError};
use super::{health_handler, method_not_allowed};
use crate::context::CallContext;
use crate::model::{NewOrder, Order, OrderView};
use crate::orders::OrderService;

/// Build the order service router.
///
/// Handlers that call the user service expect a [`CallContext`] extension,
/// installed by [`request_context`](super::middleware::request_context).
pub fn order_routes(service: OrderService) -> Router {
    Router::new()
        .route(
            "/orders",
            get(list_orders).post(create_order).fallback(method_not_allowed),
        )
        .route("/orders/", get(empty_order_id).fallback(method_not_allowed))
        .route("/orders/:id", get(get_order).fallback(method_not_allowed))
        .route("/health", get(health_handler))
        .with_state(service)
}

/// `GET /orders` - stored orders, never enriched.
async fn list_orders(State(service): State<OrderService>) -> Json<Vec<Order>> {
    Json(service.list_orders())
}

/// `POST /orders` - 201 once the owning user is confirmed, 400 otherwise.
async fn create_order(
    State(service): State<OrderService>,
    Extension(ctx): Extension<CallContext>,
    body: Bytes,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let input: NewOrder = serde_json::from_slice(&body).map_err(ApiError::invalid_body)?;
    let order = service.create_order(&ctx, input).await?;
    tracing::info!(order_id = order.id, user_id = order.user_id, "order created");
    Ok((StatusCode::CREATED, Json(order)))
}

/// `GET /orders/:id` - the order, with `user` when the user service answered.
async fn get_order(
    State(service): State<OrderService>,
    Extension(ctx): Extension<CallContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<OrderView>, ApiError> {
    let id = parse_id(&raw_id, "order")?;
    let view = service.fetch_order(&ctx, id).await?;
    Ok(Json(view))
}

/// `GET /orders/` - an empty id is a bad id, not a missing route.
async fn empty_order_id() -> ApiError {
    ApiError::invalid_id("order")
}

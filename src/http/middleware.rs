//! Per-request context and tracing span.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

use crate::context::CallContext;

/// Deadline given to every inbound request.
#[derive(Debug, Clone, Copy)]
pub struct RequestTimeout(pub Duration);

/// Attach a fresh [`CallContext`] to the request and run the handler inside a
/// span.
///
/// The context is cancelled when this future finishes or is dropped, so a
/// client disconnect aborts outbound calls the handler still has in flight.
pub async fn request_context(
    State(RequestTimeout(timeout)): State<RequestTimeout>,
    mut req: Request,
    next: Next,
) -> Response {
    let ctx = CallContext::with_timeout(timeout);
    let _cancel = ctx.cancel_on_drop();

    let span = tracing::info_span!("request", method = %req.method(), path = %req.uri().path());
    req.extensions_mut().insert(ctx);

    let response = next.run(req).instrument(span.clone()).await;
    span.in_scope(|| tracing::debug!(status = response.status().as_u16(), "request finished"));
    response
}

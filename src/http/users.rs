//! Routes of the user service.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use super::error::{parse_id, ApiError};
use super::{health_handler, method_not_allowed};
use crate::model::{NewUser, User};
use crate::store::RecordStore;

/// Build the user service router. Request middleware is added by the caller.
pub fn user_routes(store: RecordStore<User>) -> Router {
    Router::new()
        .route(
            "/users",
            get(list_users).post(create_user).fallback(method_not_allowed),
        )
        .route("/users/", get(empty_user_id).fallback(method_not_allowed))
        .route("/users/:id", get(get_user).fallback(method_not_allowed))
        .route("/health", get(health_handler))
        .with_state(store)
}

/// `GET /users` - every stored user.
async fn list_users(State(store): State<RecordStore<User>>) -> Json<Vec<User>> {
    Json(store.list())
}

/// `POST /users` - the stored user, with its assigned id, and 201.
async fn create_user(
    State(store): State<RecordStore<User>>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let input: NewUser = serde_json::from_slice(&body).map_err(ApiError::invalid_body)?;
    let user = store.create(User::from(input));
    tracing::info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /users/:id` - the user, 400 for a bad id, 404 when absent.
async fn get_user(
    State(store): State<RecordStore<User>>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id, "user")?;
    store
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("user not found".into()))
}

/// `GET /users/` - an empty id is a bad id, not a missing route.
async fn empty_user_id() -> ApiError {
    ApiError::invalid_id("user")
}

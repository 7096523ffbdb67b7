//! Route handlers. Each one validates its input, touches the store at most
//! once and builds a JSON envelope.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use super::body::JsonBody;
use super::path::UserId;
use super::AppState;
use crate::error::ApiError;
use crate::store::UserPatch;

/// Plain-text body served at `/`.
pub const BANNER: &str = "User API server is running...";

/// `GET /`
pub async fn root() -> &'static str {
    BANNER
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /user`: echo `name` and `age` without storing anything.
///
/// `name` must be a non-empty string. `age` only has to be present, so
/// `0`, `false` and `null` are all accepted.
pub async fn echo_user(body: JsonBody) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (Some(name), Some(age)) = (body.non_empty_str("name"), body.get("age")) else {
        return Err(ApiError::Validation("Both name and age are required"));
    };

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User received successfully",
            "data": { "name": name, "age": age },
        })),
    ))
}

/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (Some(name), Some(email)) = (body.non_empty_str("name"), body.non_empty_str("email"))
    else {
        return Err(ApiError::Validation("name and email are required"));
    };

    let user = state.store.create(name, email)?;
    tracing::debug!(id = user.id, "created user");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully", "user": user })),
    ))
}

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = state.store.list_all()?;
    Ok(Json(
        json!({ "message": "Users fetched successfully", "users": users }),
    ))
}

/// `GET /users/:id`
pub async fn get_user(
    State(state): State<AppState>,
    id: UserId,
) -> Result<Json<Value>, ApiError> {
    let id = id.get()?;
    let user = state.store.find_by_id(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(
        json!({ "message": "User fetched successfully", "user": user }),
    ))
}

/// `PUT /users/:id`: only non-empty string fields are applied.
pub async fn update_user(
    State(state): State<AppState>,
    id: UserId,
    body: JsonBody,
) -> Result<Json<Value>, ApiError> {
    let id = id.get()?;
    let patch = UserPatch {
        name: body.non_empty_str("name").map(str::to_string),
        email: body.non_empty_str("email").map(str::to_string),
    };

    let user = state.store.update(id, &patch)?.ok_or(ApiError::NotFound)?;
    tracing::debug!(id, "updated user");
    Ok(Json(
        json!({ "message": "User updated successfully", "user": user }),
    ))
}

/// `DELETE /users/:id`
pub async fn delete_user(
    State(state): State<AppState>,
    id: UserId,
) -> Result<Json<Value>, ApiError> {
    let id = id.get()?;
    if !state.store.delete(id)? {
        return Err(ApiError::NotFound);
    }
    tracing::debug!(id, "deleted user");
    Ok(Json(json!({ "message": "User deleted successfully" })))
}

/// Fallback for unmatched paths and unsupported methods.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

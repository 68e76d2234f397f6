//! Notification routes, served by the notifications backend

use crate::error::ApiError;
use crate::services::RequestIdentity;
use crate::state::AppState;
use crate::types::ApiResponse;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{delete, get, put},
};
use serde_json::Value;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(list).post(send))
        .route("/notifications/{id}/read", put(mark_read))
        .route("/notifications/{id}", delete(remove))
}

async fn list(
    State(state): State<AppState>,
    identity: RequestIdentity,
) -> Result<ApiResponse, ApiError> {
    Ok(state.notifications.list(&identity).await?.into())
}

async fn send(
    State(state): State<AppState>,
    identity: RequestIdentity,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse, ApiError> {
    let Json(payload) = body?;
    Ok(state.notifications.send(&identity, payload).await?.into())
}

async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
    identity: RequestIdentity,
) -> Result<ApiResponse, ApiError> {
    Ok(state.notifications.mark_read(&identity, &id).await?.into())
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    identity: RequestIdentity,
) -> Result<ApiResponse, ApiError> {
    Ok(state.notifications.delete(&identity, &id).await?.into())
}

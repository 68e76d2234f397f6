//! Event routes, proxied to the events service
//!
//! Reads are public but personalize when a credential is present, so they
//! forward the bearer only when the middleware attached an identity.

use crate::error::ApiError;
use crate::services::RequestIdentity;
use crate::state::AppState;
use crate::types::ApiResponse;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::get,
};
use serde_json::Value;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list).post(create))
        .route("/events/{id}", get(get_by_id).put(update).delete(delete))
}

async fn list(
    State(state): State<AppState>,
    identity: Option<RequestIdentity>,
) -> Result<ApiResponse, ApiError> {
    let bearer = identity.as_ref().map(RequestIdentity::bearer);
    Ok(state.events.list(bearer).await?.into())
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    identity: Option<RequestIdentity>,
) -> Result<ApiResponse, ApiError> {
    let bearer = identity.as_ref().map(RequestIdentity::bearer);
    Ok(state.events.get(bearer, &id).await?.into())
}

async fn create(
    State(state): State<AppState>,
    identity: RequestIdentity,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse, ApiError> {
    let Json(event) = body?;
    let created = state.events.create(identity.bearer(), event).await?;
    Ok(ApiResponse::Created(created))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    identity: RequestIdentity,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse, ApiError> {
    let Json(event) = body?;
    Ok(state
        .events
        .update(identity.bearer(), &id, event)
        .await?
        .into())
}

async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    identity: RequestIdentity,
) -> Result<ApiResponse, ApiError> {
    Ok(state.events.delete(identity.bearer(), &id).await?.into())
}

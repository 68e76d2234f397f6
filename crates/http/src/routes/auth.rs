//! Authentication routes, proxied to the auth service

use crate::error::ApiError;
use crate::services::RequestIdentity;
use crate::state::AppState;
use crate::types::ApiResponse;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use serde_json::Value;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(profile).put(update_profile))
        .route("/users/me", get(profile).put(update_profile))
}

async fn register(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse, ApiError> {
    let Json(payload) = body?;
    Ok(state.auth.register(payload).await?.into())
}

async fn login(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse, ApiError> {
    let Json(payload) = body?;
    Ok(state.auth.login(payload).await?.into())
}

async fn profile(
    State(state): State<AppState>,
    identity: RequestIdentity,
) -> Result<ApiResponse, ApiError> {
    Ok(state.auth.profile(identity.bearer()).await?.into())
}

async fn update_profile(
    State(state): State<AppState>,
    identity: RequestIdentity,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse, ApiError> {
    let Json(payload) = body?;
    Ok(state
        .auth
        .update_profile(identity.bearer(), payload)
        .await?
        .into())
}

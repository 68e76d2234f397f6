//! Subscription routes, served by the orders backend (live or mock)

use crate::error::ApiError;
use crate::services::RequestIdentity;
use crate::state::AppState;
use crate::types::ApiResponse;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{delete, get, post},
};
use portico_core::GatewayError;
use serde_json::Value;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders/subscribe", post(subscribe))
        .route("/orders/my-subscriptions", get(my_subscriptions))
        .route("/orders/event/{event_id}/attendees", get(attendees))
        .route("/orders/{event_id}", delete(unsubscribe))
}

async fn subscribe(
    State(state): State<AppState>,
    identity: RequestIdentity,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse, ApiError> {
    let Json(payload) = body?;
    let event_id = event_id_field(&payload)
        .ok_or_else(|| GatewayError::BadRequest("eventId is required".to_string()))?;
    Ok(state.orders.subscribe(&identity, &event_id).await?.into())
}

async fn unsubscribe(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    identity: RequestIdentity,
) -> Result<ApiResponse, ApiError> {
    Ok(state.orders.unsubscribe(&identity, &event_id).await?.into())
}

async fn my_subscriptions(
    State(state): State<AppState>,
    identity: RequestIdentity,
) -> Result<ApiResponse, ApiError> {
    Ok(state.orders.my_subscriptions(&identity).await?.into())
}

async fn attendees(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    identity: RequestIdentity,
) -> Result<ApiResponse, ApiError> {
    Ok(state
        .orders
        .event_attendees(&identity, &event_id)
        .await?
        .into())
}

/// Accept both string and numeric event ids in the subscribe body
fn event_id_field(payload: &Value) -> Option<String> {
    match payload.get("eventId")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

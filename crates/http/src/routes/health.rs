//! Health and root handlers

use crate::state::{AppState, BackendStatuses};
use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub services: BackendStatuses,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Per-backend configured/mock status; no auth required
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        services: (*state.statuses).clone(),
        timestamp: chrono::Utc::now(),
    })
}

/// Online banner
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: String,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "online".to_string(),
        message: "API Gateway is running".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

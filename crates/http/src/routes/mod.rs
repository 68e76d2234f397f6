//! API route definitions

use crate::error::ApiError;
use crate::state::AppState;
use axum::{Router, routing::get};
use portico_core::GatewayError;

pub mod auth;
pub mod events;
pub mod health;
pub mod notifications;
pub mod orders;

/// Assemble the full gateway router.
///
/// Every route is also served under `/api` for clients that still use the
/// prefixed paths.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(auth::router())
        .merge(events::router())
        .merge(orders::router())
        .merge(notifications::router())
        .route("/health", get(health::health));

    Router::new()
        .route("/", get(health::root))
        .merge(api.clone())
        .nest("/api", api)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError(GatewayError::NotFound)
}

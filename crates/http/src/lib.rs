//! Portico HTTP layer
//!
//! The axum server sitting between the browser client and the backend
//! services: auth middleware, route handlers, live upstream clients, mock
//! fallback services and the response envelope.

#[macro_use]
extern crate tracing;

pub mod client;
pub mod error;
pub mod middleware;
pub mod mocks;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
pub mod types;

pub use error::ApiError;
pub use server::{HttpServer, ServerConfig, ServerError};
pub use state::AppState;
pub use types::ApiResponse;

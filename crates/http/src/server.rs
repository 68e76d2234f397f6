//! HTTP server assembly
//!
//! Wires the router together with the middleware stack: request logging,
//! tracing, the catch-panic safety net, a bounded request timeout, auth
//! classification and CORS restricted to the configured origin.

use crate::error::ApiError;
use crate::middleware::{auth_middleware, log_request};
use crate::routes;
use crate::state::AppState;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::response::{IntoResponse, Response};
use portico_core::GatewayError;
use std::any::Any;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

/// Server errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub bind_addr: SocketAddr,
    /// Allowed origin for cross-origin requests
    pub cors_origin: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

/// The gateway HTTP server
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
    cors_origin: HeaderValue,
}

impl HttpServer {
    /// Create a new server.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured CORS origin is not a valid
    /// header value.
    pub fn new(config: ServerConfig, state: AppState) -> Result<Self, ServerError> {
        let cors_origin = config
            .cors_origin
            .parse()
            .map_err(|_| ServerError::InvalidOrigin(config.cors_origin.clone()))?;
        Ok(Self {
            config,
            state,
            cors_origin,
        })
    }

    /// Build the application router with the full middleware stack
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(self.cors_origin.clone())
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true);

        routes::router(self.state.clone())
            .layer(axum::middleware::from_fn_with_state(
                self.state.clone(),
                auth_middleware,
            ))
            .layer(
                ServiceBuilder::new()
                    .layer(axum::middleware::from_fn(log_request))
                    .layer(TraceLayer::new_for_http())
                    .layer(CatchPanicLayer::custom(handle_panic))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        self.config.timeout_secs,
                    ))),
            )
            .layer(cors)
    }

    /// Bind and serve until the shutdown future resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if binding fails or the server aborts.
    pub async fn serve<F>(&self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener =
            TcpListener::bind(self.config.bind_addr)
                .await
                .map_err(|source| ServerError::Bind {
                    addr: self.config.bind_addr,
                    source,
                })?;

        info!("HTTP server listening on {}", self.config.bind_addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}

/// Last-resort 500: no fault reaches the client as a raw panic message
fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    ApiError(GatewayError::Internal("handler panicked".to_string())).into_response()
}

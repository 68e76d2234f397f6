//! Live upstream clients
//!
//! One client per backend service, all sharing the same request plumbing
//! and error normalization: no response at all becomes a 503 with the
//! service's connect-failure message, an error status passes through with
//! the body's `message` or `error` field (or a per-operation fallback),
//! and a 204 is surfaced as [`UpstreamResponse::NoContent`].

pub mod auth;
pub mod events;
pub mod orders;

pub use auth::AuthClient;
pub use events::EventsClient;
pub use orders::OrdersClient;

use portico_core::{GatewayError, UpstreamResponse};
use reqwest::{Client, Method, RequestBuilder, StatusCode, header};
use serde_json::Value;
use std::time::Duration;

/// Shared HTTP plumbing for one upstream base URL
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    /// 503 message for this service when no response arrives at all
    connect_failure: &'static str,
}

impl UpstreamClient {
    /// Create a client with a bounded per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        connect_failure: &'static str,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            connect_failure,
        })
    }

    /// Build a request, forwarding the bearer credential unchanged when
    /// present.
    pub fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);
        if let Some(token) = bearer {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        request
    }

    /// Send a request and normalize the outcome.
    ///
    /// `fallback` is the message used when an error body carries neither a
    /// `message` nor an `error` field.
    pub async fn execute(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        // a send error means no response was received: refused, timed out
        // or unreachable; all collapse to 503
        let response = request.send().await.map_err(|e| {
            debug!(error = %e, "upstream request produced no response");
            GatewayError::Unavailable {
                message: self.connect_failure.to_string(),
            }
        })?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(UpstreamResponse::NoContent);
        }
        if status.is_success() {
            let body = response.json().await.map_err(|_| GatewayError::Upstream {
                status: 502,
                message: fallback.to_string(),
            })?;
            return Ok(UpstreamResponse::Json(body));
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| body.get("error").and_then(Value::as_str))
            .unwrap_or(fallback)
            .to_string();
        Err(GatewayError::Upstream {
            status: status.as_u16(),
            message,
        })
    }

    /// Like [`execute`](Self::execute) for operations that always expect a
    /// JSON body; an unexpected 204 yields `null`.
    pub async fn execute_json(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<Value, GatewayError> {
        Ok(self.execute(request, fallback).await?.into_json())
    }
}

//! Upstream backend abstraction
//!
//! Route handlers hold one capability interface per backend and are
//! oblivious to whether a live client or the mock fallback sits behind it;
//! the choice is made once at startup from configuration.

use crate::error::GatewayError;
use crate::identity::Identity;
use async_trait::async_trait;
use serde_json::Value;

/// Normalized result of one upstream operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamResponse {
    /// Verbatim JSON body to pass through to the caller
    Json(Value),
    /// Upstream answered 204; the gateway emits 204 with an empty body
    NoContent,
}

impl UpstreamResponse {
    /// Unwrap the JSON body, treating an unexpected 204 as `null`
    pub fn into_json(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::NoContent => Value::Null,
        }
    }
}

/// Subscription operations backed by the orders service or its mock.
///
/// The mock implementation is deliberately stateless: subscribe and
/// unsubscribe mutate nothing and listing returns a fixed dataset, so
/// callers must not expect subscribe-then-list consistency when mocks are
/// active.
#[async_trait]
pub trait OrdersBackend: Send + Sync {
    async fn subscribe(
        &self,
        identity: &Identity,
        event_id: &str,
    ) -> Result<UpstreamResponse, GatewayError>;

    async fn unsubscribe(
        &self,
        identity: &Identity,
        event_id: &str,
    ) -> Result<UpstreamResponse, GatewayError>;

    async fn my_subscriptions(
        &self,
        identity: &Identity,
    ) -> Result<UpstreamResponse, GatewayError>;

    async fn event_attendees(
        &self,
        identity: &Identity,
        event_id: &str,
    ) -> Result<UpstreamResponse, GatewayError>;
}

/// Notification operations; currently only the mock implementation exists
/// (the platform has no live notification service yet).
#[async_trait]
pub trait NotificationsBackend: Send + Sync {
    async fn list(&self, identity: &Identity) -> Result<UpstreamResponse, GatewayError>;

    async fn send(
        &self,
        identity: &Identity,
        notification: Value,
    ) -> Result<UpstreamResponse, GatewayError>;

    async fn mark_read(
        &self,
        identity: &Identity,
        notification_id: &str,
    ) -> Result<UpstreamResponse, GatewayError>;

    async fn delete(
        &self,
        identity: &Identity,
        notification_id: &str,
    ) -> Result<UpstreamResponse, GatewayError>;
}

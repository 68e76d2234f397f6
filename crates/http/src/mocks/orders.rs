//! Mock orders backend
//!
//! Subscribe returns a fresh confirmed subscription; unsubscribe always
//! acknowledges success (idempotent); listings return a fixed illustrative
//! dataset. Nothing is persisted between calls, so subscribe-then-list is
//! deliberately inconsistent.

use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, Utc};
use portico_core::{GatewayError, Identity, OrdersBackend, UpstreamResponse};
use serde_json::json;

#[derive(Debug, Default, Clone, Copy)]
pub struct MockOrdersService;

impl MockOrdersService {
    pub fn new() -> Self {
        Self
    }
}

fn iso(ts: chrono::DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[async_trait]
impl OrdersBackend for MockOrdersService {
    async fn subscribe(
        &self,
        identity: &Identity,
        event_id: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        debug!("serving mock subscription");
        let now = Utc::now();
        Ok(UpstreamResponse::Json(json!({
            "success": true,
            "message": "Inscrição realizada com sucesso",
            "data": {
                "id": format!("sub-{}", now.timestamp_millis()),
                "userId": identity.subject_id,
                "eventId": event_id,
                "status": "confirmed",
                "subscribedAt": iso(now)
            }
        })))
    }

    async fn unsubscribe(
        &self,
        _identity: &Identity,
        _event_id: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        debug!("serving mock unsubscription");
        // succeeds whether or not the subscription ever existed
        Ok(UpstreamResponse::Json(json!({
            "success": true,
            "message": "Inscrição cancelada com sucesso"
        })))
    }

    async fn my_subscriptions(
        &self,
        identity: &Identity,
    ) -> Result<UpstreamResponse, GatewayError> {
        debug!("serving mock subscription list");
        let now = Utc::now();
        Ok(UpstreamResponse::Json(json!({
            "success": true,
            "data": [
                {
                    "id": "sub-1",
                    "userId": identity.subject_id,
                    "eventId": "event-1",
                    "eventName": "Workshop de React",
                    "eventDate": iso(now + Duration::days(3)),
                    "status": "confirmed",
                    "subscribedAt": iso(now - Duration::days(2))
                },
                {
                    "id": "sub-2",
                    "userId": identity.subject_id,
                    "eventId": "event-2",
                    "eventName": "Palestra sobre Node.js",
                    "eventDate": iso(now + Duration::days(7)),
                    "status": "confirmed",
                    "subscribedAt": iso(now - Duration::days(1))
                }
            ]
        })))
    }

    async fn event_attendees(
        &self,
        _identity: &Identity,
        _event_id: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        debug!("serving mock attendee list");
        let now = Utc::now();
        Ok(UpstreamResponse::Json(json!({
            "success": true,
            "data": [
                {
                    "id": "user-1",
                    "name": "João Silva",
                    "email": "joao@example.com",
                    "subscribedAt": iso(now - Duration::days(2))
                },
                {
                    "id": "user-2",
                    "name": "Maria Santos",
                    "email": "maria@example.com",
                    "subscribedAt": iso(now - Duration::days(1))
                }
            ]
        })))
    }
}

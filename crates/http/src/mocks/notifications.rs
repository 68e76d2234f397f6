//! Mock notifications backend

use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, Utc};
use portico_core::{GatewayError, Identity, NotificationsBackend, UpstreamResponse};
use serde_json::{Value, json};

#[derive(Debug, Default, Clone, Copy)]
pub struct MockNotificationsService;

impl MockNotificationsService {
    pub fn new() -> Self {
        Self
    }
}

fn iso(ts: chrono::DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[async_trait]
impl NotificationsBackend for MockNotificationsService {
    async fn list(&self, identity: &Identity) -> Result<UpstreamResponse, GatewayError> {
        debug!("serving mock notification list");
        let now = Utc::now();
        Ok(UpstreamResponse::Json(json!({
            "success": true,
            "data": [
                {
                    "id": "notif-1",
                    "userId": identity.subject_id,
                    "type": "event_reminder",
                    "title": "Lembrete de Evento",
                    "message": "Seu evento \"Workshop de React\" começa em 1 hora",
                    "read": false,
                    "createdAt": iso(now)
                },
                {
                    "id": "notif-2",
                    "userId": identity.subject_id,
                    "type": "event_update",
                    "title": "Atualização de Evento",
                    "message": "O evento \"Palestra sobre Node.js\" teve o horário alterado",
                    "read": true,
                    "createdAt": iso(now - Duration::days(1))
                },
                {
                    "id": "notif-3",
                    "userId": identity.subject_id,
                    "type": "subscription_confirmed",
                    "title": "Inscrição Confirmada",
                    "message": "Sua inscrição para \"Seminário de IA\" foi confirmada",
                    "read": false,
                    "createdAt": iso(now - Duration::hours(2))
                }
            ]
        })))
    }

    async fn send(
        &self,
        _identity: &Identity,
        notification: Value,
    ) -> Result<UpstreamResponse, GatewayError> {
        debug!("serving mock notification send");
        let now = Utc::now();
        let mut data = json!({
            "id": format!("notif-{}", now.timestamp_millis()),
            "read": false,
            "createdAt": iso(now)
        });
        if let (Some(out), Some(input)) = (data.as_object_mut(), notification.as_object()) {
            for (key, value) in input {
                out.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
        Ok(UpstreamResponse::Json(json!({
            "success": true,
            "message": "Notificação enviada com sucesso",
            "data": data
        })))
    }

    async fn mark_read(
        &self,
        _identity: &Identity,
        notification_id: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        debug!("serving mock notification mark-read");
        Ok(UpstreamResponse::Json(json!({
            "success": true,
            "message": "Notificação marcada como lida",
            "data": {
                "id": notification_id,
                "read": true,
                "readAt": iso(Utc::now())
            }
        })))
    }

    async fn delete(
        &self,
        _identity: &Identity,
        _notification_id: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        debug!("serving mock notification delete");
        Ok(UpstreamResponse::Json(json!({
            "success": true,
            "message": "Notificação removida com sucesso"
        })))
    }
}

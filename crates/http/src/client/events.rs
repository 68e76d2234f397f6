//! Events service client
//!
//! Translates between the gateway's external event vocabulary and the
//! backend's internal one in both directions; see
//! [`portico_core::mapping`].

use super::UpstreamClient;
use portico_core::{GatewayError, UpstreamResponse, mapping};
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;

const CONNECT_FAILURE: &str =
    "Falha ao conectar com a API de eventos. Tente novamente mais tarde.";

/// Client for the events backend
#[derive(Debug, Clone)]
pub struct EventsClient {
    inner: UpstreamClient,
}

impl EventsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            inner: UpstreamClient::new(base_url, timeout, CONNECT_FAILURE)?,
        })
    }

    pub async fn list(&self, bearer: Option<&str>) -> Result<Value, GatewayError> {
        let request = self.inner.request(Method::GET, "/events", bearer);
        let body = self
            .inner
            .execute_json(request, "Falha ao conectar com a API de eventos")
            .await?;
        Ok(mapping::event_from_backend(body))
    }

    pub async fn get(&self, bearer: Option<&str>, event_id: &str) -> Result<Value, GatewayError> {
        let request = self
            .inner
            .request(Method::GET, &format!("/events/{event_id}"), bearer);
        let body = self
            .inner
            .execute_json(request, "Falha ao buscar evento")
            .await?;
        Ok(mapping::event_from_backend(body))
    }

    pub async fn create(&self, bearer: &str, event: Value) -> Result<Value, GatewayError> {
        let request = self
            .inner
            .request(Method::POST, "/events", Some(bearer))
            .json(&mapping::event_to_backend(event));
        let body = self
            .inner
            .execute_json(request, "Falha ao criar evento")
            .await?;
        Ok(mapping::event_from_backend(body))
    }

    pub async fn update(
        &self,
        bearer: &str,
        event_id: &str,
        event: Value,
    ) -> Result<Value, GatewayError> {
        let request = self
            .inner
            .request(Method::PUT, &format!("/events/{event_id}"), Some(bearer))
            .json(&mapping::event_to_backend(event));
        let body = self
            .inner
            .execute_json(request, "Falha ao atualizar evento")
            .await?;
        Ok(mapping::event_from_backend(body))
    }

    /// Delete an event; the backend's 204 passes through as the gateway's
    /// own 204 instead of being wrapped in JSON.
    pub async fn delete(
        &self,
        bearer: &str,
        event_id: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        let request = self
            .inner
            .request(Method::DELETE, &format!("/events/{event_id}"), Some(bearer));
        self.inner.execute(request, "Falha ao excluir evento").await
    }
}

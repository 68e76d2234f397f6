//! Orders service client

use super::UpstreamClient;
use async_trait::async_trait;
use portico_core::{GatewayError, Identity, OrdersBackend, UpstreamResponse};
use reqwest::Method;
use serde_json::json;
use std::time::Duration;

const CONNECT_FAILURE: &str =
    "Falha ao conectar com a API de pedidos. Tente novamente mais tarde.";

// the orders service exposes its routes under a development prefix
const BASE_PATH: &str = "/api/development/orders";

/// Live client for the orders backend
#[derive(Debug, Clone)]
pub struct OrdersClient {
    inner: UpstreamClient,
}

impl OrdersClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            inner: UpstreamClient::new(base_url, timeout, CONNECT_FAILURE)?,
        })
    }
}

#[async_trait]
impl OrdersBackend for OrdersClient {
    async fn subscribe(
        &self,
        identity: &Identity,
        event_id: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        let request = self
            .inner
            .request(
                Method::POST,
                &format!("{BASE_PATH}/subscribe"),
                Some(&identity.bearer),
            )
            .json(&json!({ "eventId": event_id }));
        self.inner
            .execute(request, "Falha ao se inscrever no evento")
            .await
    }

    async fn unsubscribe(
        &self,
        identity: &Identity,
        event_id: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        let request = self.inner.request(
            Method::DELETE,
            &format!("{BASE_PATH}/{event_id}"),
            Some(&identity.bearer),
        );
        self.inner
            .execute(request, "Falha ao cancelar inscrição")
            .await
    }

    async fn my_subscriptions(
        &self,
        identity: &Identity,
    ) -> Result<UpstreamResponse, GatewayError> {
        let request = self.inner.request(
            Method::GET,
            &format!("{BASE_PATH}/my-subscriptions"),
            Some(&identity.bearer),
        );
        self.inner
            .execute(request, "Falha ao buscar inscrições")
            .await
    }

    async fn event_attendees(
        &self,
        identity: &Identity,
        event_id: &str,
    ) -> Result<UpstreamResponse, GatewayError> {
        let request = self.inner.request(
            Method::GET,
            &format!("{BASE_PATH}/event/{event_id}/attendees"),
            Some(&identity.bearer),
        );
        self.inner
            .execute(request, "Falha ao buscar participantes")
            .await
    }
}

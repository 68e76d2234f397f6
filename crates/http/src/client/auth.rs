//! Auth service client

use super::UpstreamClient;
use portico_core::GatewayError;
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;

const CONNECT_FAILURE: &str =
    "Falha ao conectar com a API de autenticação. Tente novamente mais tarde.";

/// Client for the authentication backend
#[derive(Debug, Clone)]
pub struct AuthClient {
    inner: UpstreamClient,
}

impl AuthClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            inner: UpstreamClient::new(base_url, timeout, CONNECT_FAILURE)?,
        })
    }

    /// Register a new user; the body passes through untouched.
    pub async fn register(&self, payload: Value) -> Result<Value, GatewayError> {
        let request = self
            .inner
            .request(Method::POST, "/auth/register", None)
            .json(&payload);
        self.inner.execute_json(request, "Registration failed").await
    }

    /// Exchange credentials for a token; the response mirrors the backend
    /// body, including its token field.
    pub async fn login(&self, payload: Value) -> Result<Value, GatewayError> {
        let request = self
            .inner
            .request(Method::POST, "/auth/login", None)
            .json(&payload);
        self.inner.execute_json(request, "Login failed").await
    }

    pub async fn profile(&self, bearer: &str) -> Result<Value, GatewayError> {
        let request = self.inner.request(Method::GET, "/users/me", Some(bearer));
        self.inner
            .execute_json(request, "Failed to fetch profile")
            .await
    }

    pub async fn update_profile(
        &self,
        bearer: &str,
        payload: Value,
    ) -> Result<Value, GatewayError> {
        let request = self
            .inner
            .request(Method::PUT, "/users/me", Some(bearer))
            .json(&payload);
        self.inner
            .execute_json(request, "Failed to update profile")
            .await
    }
}

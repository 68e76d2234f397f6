//! State assembly
//!
//! Decides once at startup, per backend, whether requests go to a live
//! upstream or the in-process mock, and records that choice in the
//! statuses the health endpoint reports.

use crate::config::Settings;
use crate::error::Result;
use portico_core::OrdersBackend;
use portico_http::client::{AuthClient, EventsClient, OrdersClient};
use portico_http::services::{TokenConfig, TokenValidator};
use portico_http::state::{AppState, BackendStatuses};
use std::sync::Arc;
use std::time::Duration;

/// Build the application state from settings.
///
/// # Errors
///
/// Returns an error if the token validator or an upstream client cannot
/// be constructed.
pub fn build_state(settings: &Settings) -> Result<AppState> {
    let validator = TokenValidator::new(&TokenConfig {
        secret: settings.auth.secret.clone(),
        insecure_dev_mode: settings.auth.insecure_dev_mode,
    })?;

    let timeout = Duration::from_secs(settings.services.timeout_secs);
    let auth = AuthClient::new(&settings.services.auth, timeout)?;
    let events = EventsClient::new(&settings.services.events, timeout)?;

    let mut statuses = BackendStatuses {
        auth: url_status(&settings.services.auth),
        events: url_status(&settings.services.events),
        notification: "using mocks".to_string(),
        orders: "using mocks".to_string(),
    };

    let mut state = AppState::new(validator, auth, events);

    match settings.services.orders.as_deref() {
        Some(url) if !settings.use_mocks => {
            info!(url, "orders backend: live");
            let orders: Arc<dyn OrdersBackend> = Arc::new(OrdersClient::new(url, timeout)?);
            state = state.with_orders_backend(orders);
            statuses.orders = "configured".to_string();
        }
        Some(_) => info!("orders backend: mocks (use_mocks is set)"),
        None => info!("orders backend: mocks (no URL configured)"),
    }

    // no live notifications client exists yet; the mock always serves
    info!("notifications backend: mocks");

    Ok(state.with_statuses(statuses))
}

/// Auth and events have no mock fallback; a blank URL is surfaced on the
/// health endpoint rather than failing startup.
fn url_status(url: &str) -> String {
    if url.trim().is_empty() {
        "not configured".to_string()
    } else {
        "configured".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_settings() -> Settings {
        let mut settings = Settings::default();
        settings.auth.secret = "test-secret".to_string();
        settings
    }

    #[test]
    fn defaults_build_with_mock_orders() {
        let state = build_state(&dev_settings()).unwrap();
        assert_eq!(state.statuses.orders, "using mocks");
        assert_eq!(state.statuses.auth, "configured");
    }

    #[test]
    fn configured_orders_url_goes_live() {
        let mut settings = dev_settings();
        settings.services.orders = Some("http://127.0.0.1:5003".to_string());
        let state = build_state(&settings).unwrap();
        assert_eq!(state.statuses.orders, "configured");
    }

    #[test]
    fn blank_auth_url_is_reported_not_configured() {
        let mut settings = dev_settings();
        settings.services.auth = String::new();
        let state = build_state(&settings).unwrap();
        assert_eq!(state.statuses.auth, "not configured");
    }

    #[test]
    fn use_mocks_overrides_a_configured_url() {
        let mut settings = dev_settings();
        settings.services.orders = Some("http://127.0.0.1:5003".to_string());
        settings.use_mocks = true;
        let state = build_state(&settings).unwrap();
        assert_eq!(state.statuses.orders, "using mocks");
    }
}

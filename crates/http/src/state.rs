//! Application state
//!
//! Everything here is immutable after startup: the route table, the token
//! validator, and one client (live or mock) per backend. Handlers never
//! know which implementation they hold.

use crate::client::{AuthClient, EventsClient};
use crate::mocks::{MockNotificationsService, MockOrdersService};
use crate::services::TokenValidator;
use portico_core::{NotificationsBackend, OrdersBackend, RouteTable};
use serde::Serialize;
use std::sync::Arc;

/// Per-backend status strings reported by the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct BackendStatuses {
    pub auth: String,
    pub events: String,
    pub notification: String,
    pub orders: String,
}

impl Default for BackendStatuses {
    fn default() -> Self {
        Self {
            auth: "configured".to_string(),
            events: "configured".to_string(),
            notification: "using mocks".to_string(),
            orders: "using mocks".to_string(),
        }
    }
}

/// Shared application state, cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<TokenValidator>,
    pub routes: Arc<RouteTable>,
    pub auth: Arc<AuthClient>,
    pub events: Arc<EventsClient>,
    pub orders: Arc<dyn OrdersBackend>,
    pub notifications: Arc<dyn NotificationsBackend>,
    pub statuses: Arc<BackendStatuses>,
}

impl AppState {
    /// Create state with the default route table and mock order and
    /// notification backends; swap in live clients with the builders.
    pub fn new(validator: TokenValidator, auth: AuthClient, events: EventsClient) -> Self {
        Self {
            validator: Arc::new(validator),
            routes: Arc::new(RouteTable::default()),
            auth: Arc::new(auth),
            events: Arc::new(events),
            orders: Arc::new(MockOrdersService::new()),
            notifications: Arc::new(MockNotificationsService::new()),
            statuses: Arc::new(BackendStatuses::default()),
        }
    }

    pub fn with_orders_backend(mut self, orders: Arc<dyn OrdersBackend>) -> Self {
        self.orders = orders;
        self
    }

    pub fn with_notifications_backend(mut self, notifications: Arc<dyn NotificationsBackend>) -> Self {
        self.notifications = notifications;
        self
    }

    pub fn with_statuses(mut self, statuses: BackendStatuses) -> Self {
        self.statuses = Arc::new(statuses);
        self
    }
}

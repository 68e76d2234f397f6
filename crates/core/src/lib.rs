//! Portico core types and traits
//!
//! Domain types shared by the gateway: the error taxonomy, request
//! identity, route classification, upstream backend traits and the
//! external/backend event vocabulary mapping. This crate is free of any
//! HTTP framework dependency so the types stay usable from tests and
//! alternative frontends.

pub mod backend;
pub mod error;
pub mod identity;
pub mod mapping;
pub mod routes;

pub use backend::{NotificationsBackend, OrdersBackend, UpstreamResponse};
pub use error::{AuthFailure, GatewayError};
pub use identity::Identity;
pub use routes::{AuthRequirement, RouteTable};

/// Result type alias using GatewayError
pub type Result<T> = std::result::Result<T, GatewayError>;

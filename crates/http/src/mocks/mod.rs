//! Mock fallback services
//!
//! Deterministic in-process substitutes used when a backend is
//! unconfigured. They keep the gateway usable in partial deployments; they
//! never simulate backend failure, and they hold no state across calls.

pub mod notifications;
pub mod orders;

pub use notifications::MockNotificationsService;
pub use orders::MockOrdersService;

//! Request middleware

pub mod auth;
pub mod trace;

pub use auth::auth_middleware;
pub use trace::log_request;

//! Request-scoped services

pub mod identity;
pub mod token;

pub use identity::RequestIdentity;
pub use token::{TokenConfig, TokenValidator};

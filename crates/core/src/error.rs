//! Gateway error taxonomy
//!
//! Every failure the gateway can emit is one of these variants; upstream
//! failures of any shape (connect error, timeout, error status, malformed
//! body) are normalized into them before a response is written.

use thiserror::Error;

/// Reasons a bearer credential fails validation.
///
/// The display strings are the exact bodies clients see on a 401, so they
/// are part of the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// No credential was supplied
    #[error("No token provided")]
    Missing,

    /// Signature valid but the expiry has passed
    #[error("Token expired")]
    Expired,

    /// Structurally broken or signed with the wrong secret
    #[error("Invalid token")]
    Malformed,
}

/// Uniform error shape for everything the gateway returns to a client
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Credential validation failed on a protected route
    #[error("{0}")]
    Auth(#[from] AuthFailure),

    /// Malformed inbound request (unparseable body, missing field)
    #[error("{0}")]
    BadRequest(String),

    /// Upstream produced no response at all (refused, timed out)
    #[error("{message}")]
    Unavailable { message: String },

    /// Upstream answered with an error status; passed through unchanged
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// No route matches the request
    #[error("Route not found")]
    NotFound,

    /// Catch-all for unexpected faults; the detail is logged, never sent
    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    /// HTTP status carried by this error
    pub fn status(&self) -> u16 {
        match self {
            Self::Auth(_) => 401,
            Self::BadRequest(_) => 400,
            Self::Unavailable { .. } => 503,
            Self::Upstream { status, .. } => *status,
            Self::NotFound => 404,
            Self::Internal(_) => 500,
        }
    }

    /// Message safe to show to a client
    ///
    /// Internal faults are masked with a fixed phrase; everything else
    /// displays its carried message.
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

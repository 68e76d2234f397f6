//! Configuration management for the Portico daemon
//!
//! Settings come from defaults, then an optional TOML file, then
//! environment variables prefixed `PORTICO` (nested keys joined with
//! `__`, so `PORTICO_AUTH__SECRET` sets `auth.secret`).

use crate::error::{DaemonError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Main daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP server configuration
    pub server: ServerSettings,

    /// Token verification configuration
    pub auth: AuthSettings,

    /// Upstream service endpoints
    pub services: ServiceSettings,

    /// Serve every backend that supports it from mocks, regardless of
    /// configured URLs
    pub use_mocks: bool,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Allowed origin for cross-origin requests
    pub cors_origin: String,

    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

/// Token verification configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Shared HS256 secret, also known to the auth service
    pub secret: String,

    /// Accept tokens without verifying signatures; development only
    pub insecure_dev_mode: bool,
}

/// Upstream service endpoints; an empty or absent URL means the backend
/// is unconfigured and mocks are used where available
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Auth service base URL
    pub auth: String,

    /// Events service base URL
    pub events: String,

    /// Orders service base URL
    pub orders: Option<String>,

    /// Notifications service base URL
    pub notification: Option<String>,

    /// Per-request timeout toward upstream services, in seconds
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_origin: "http://localhost:3000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            auth: "http://127.0.0.1:5001".to_string(),
            events: "http://127.0.0.1:5002".to_string(),
            orders: None,
            notification: None,
            timeout_secs: 10,
        }
    }
}

impl Settings {
    /// Load configuration from an optional file plus the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value cannot be
    /// parsed into the expected type.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::from(path));
        }
        let settings = builder
            .add_source(
                config::Environment::with_prefix("PORTICO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Self = settings.try_deserialize()?;
        settings.services.orders = normalize_url(settings.services.orders.take());
        settings.services.notification = normalize_url(settings.services.notification.take());
        Ok(settings)
    }

    /// Reject configurations that cannot run safely.
    ///
    /// # Errors
    ///
    /// Returns an error when no token secret is set and dev mode is off.
    pub fn validate(&self) -> Result<()> {
        if self.auth.secret.trim().is_empty() && !self.auth.insecure_dev_mode {
            return Err(DaemonError::InvalidConfig(
                "auth.secret is required unless auth.insecure_dev_mode is set".to_string(),
            ));
        }
        Ok(())
    }

    /// The socket address the HTTP server binds.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is not a valid address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|_| {
                DaemonError::InvalidConfig(format!("invalid server.host: {}", self.server.host))
            })
    }
}

/// Treat empty and whitespace-only URLs the same as absent ones
fn normalize_url(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}

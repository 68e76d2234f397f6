//! Portico daemon
//!
//! Loads configuration, picks live or mock backends, and runs the HTTP
//! gateway until shutdown.

#[macro_use]
extern crate tracing;

pub mod bootstrap;
pub mod config;
pub mod error;

pub use bootstrap::build_state;
pub use config::Settings;
pub use error::{DaemonError, Result};

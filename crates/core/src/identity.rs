//! Verified caller identity

use serde::{Deserialize, Serialize};

/// Identity derived from a verified bearer credential.
///
/// Exists only for the duration of one request. The original bearer string
/// is kept alongside the subject so upstream calls can forward the
/// credential unchanged; the gateway never persists either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Subject identifier extracted from the token claims
    pub subject_id: String,
    /// The raw bearer credential the identity was derived from
    pub bearer: String,
}

impl Identity {
    pub fn new(subject_id: impl Into<String>, bearer: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            bearer: bearer.into(),
        }
    }
}

//! Bearer token validation
//!
//! Verifies HS256 tokens against the shared secret known to the auth
//! service and extracts the caller's subject. Pure with respect to the
//! configuration captured at construction; no I/O.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use portico_core::{AuthFailure, GatewayError, Identity};
use serde::{Deserialize, Serialize};

/// Token verification configuration
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Shared HS256 secret; must be non-empty unless dev mode is on
    pub secret: String,
    /// Explicitly disables signature verification. Never inferred from an
    /// absent secret; refuse to construct instead.
    pub insecure_dev_mode: bool,
}

/// Claim set the auth service may put the subject under. Tried in order:
/// `userId`, then `id`, then the standard `sub`.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(rename = "userId")]
    user_id: Option<String>,
    id: Option<String>,
    sub: Option<String>,
    exp: i64,
}

impl Claims {
    fn subject(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .or(self.id.as_deref())
            .or(self.sub.as_deref())
    }
}

/// Validates bearer credentials and derives the request identity
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    /// Build a validator.
    ///
    /// # Errors
    ///
    /// Refuses an empty secret unless `insecure_dev_mode` is set, so a
    /// missing production secret can never silently disable verification.
    pub fn new(config: &TokenConfig) -> Result<Self, GatewayError> {
        let mut validation = Validation::new(Algorithm::HS256);
        if config.insecure_dev_mode {
            warn!("insecure_dev_mode is on: token signatures are NOT verified");
            validation.insecure_disable_signature_validation();
        } else if config.secret.is_empty() {
            return Err(GatewayError::Internal(
                "JWT secret is not set; refusing to start without auth.insecure_dev_mode"
                    .to_string(),
            ));
        }
        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        })
    }

    /// Verify a credential and extract the caller identity.
    pub fn validate(&self, token: &str) -> Result<Identity, AuthFailure> {
        let data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthFailure::Expired,
                    _ => AuthFailure::Malformed,
                }
            })?;
        let subject = data.claims.subject().ok_or(AuthFailure::Malformed)?;
        Ok(Identity::new(subject, token))
    }

    /// Extract the token from an `Authorization: Bearer <token>` header
    pub fn bearer_token(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

//! Request identity extension and extractors

use crate::error::ApiError;
use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use portico_core::{AuthFailure, Identity};
use std::convert::Infallible;
use std::ops::Deref;

/// Verified identity attached to the request by the auth middleware.
///
/// Handlers on `Required` routes extract it directly; handlers on
/// `Optional` routes extract `Option<RequestIdentity>` and personalize
/// when it is present.
#[derive(Debug, Clone)]
pub struct RequestIdentity(pub Identity);

impl RequestIdentity {
    pub fn bearer(&self) -> &str {
        &self.0.bearer
    }
}

impl Deref for RequestIdentity {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for RequestIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestIdentity>()
            .cloned()
            .ok_or_else(|| ApiError::from(AuthFailure::Missing))
    }
}

impl<S> OptionalFromRequestParts<S> for RequestIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<RequestIdentity>().cloned())
    }
}

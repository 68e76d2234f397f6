//! Authentication middleware
//!
//! Consults the route table for every request. `Required` routes
//! short-circuit with a 401 on any validation failure; `Optional` routes
//! attach an identity when validation succeeds and proceed anonymously
//! otherwise; everything else passes through untouched.

use crate::error::ApiError;
use crate::services::RequestIdentity;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use portico_core::{AuthFailure, AuthRequirement, Identity};

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let requirement = state
        .routes
        .classify(req.method().as_str(), req.uri().path());

    match requirement {
        Some(AuthRequirement::Required) => match authenticate(&state, req.headers()) {
            Ok(identity) => {
                req.extensions_mut().insert(RequestIdentity(identity));
                next.run(req).await
            }
            // terminal short-circuit: the handler is never reached
            Err(failure) => ApiError::from(failure).into_response(),
        },
        Some(AuthRequirement::Optional) => {
            if let Ok(identity) = authenticate(&state, req.headers()) {
                req.extensions_mut().insert(RequestIdentity(identity));
            }
            next.run(req).await
        }
        Some(AuthRequirement::None) | None => next.run(req).await,
    }
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Identity, AuthFailure> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthFailure::Missing)?;
    let token =
        crate::services::TokenValidator::bearer_token(header).ok_or(AuthFailure::Missing)?;
    state.validator.validate(token)
}

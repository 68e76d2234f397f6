//! HTTP error envelope
//!
//! Every failure leaving the gateway is written as
//! `{"success": false, "message": ...}` with the status the error carries.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portico_core::{AuthFailure, GatewayError};
use serde::{Deserialize, Serialize};

/// Response-writing wrapper around [`GatewayError`]
#[derive(Debug)]
pub struct ApiError(pub GatewayError);

/// Failure body shape shared by every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl From<AuthFailure> for ApiError {
    fn from(failure: AuthFailure) -> Self {
        Self(GatewayError::Auth(failure))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(GatewayError::BadRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let GatewayError::Internal(detail) = &self.0 {
            error!(%detail, "internal gateway fault");
        }
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            success: false,
            message: self.0.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_faults_are_masked_in_the_response() {
        let response =
            ApiError(GatewayError::Internal("connection pool poisoned".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_status_is_preserved() {
        let response = ApiError(GatewayError::Upstream {
            status: 409,
            message: "duplicate".into(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}

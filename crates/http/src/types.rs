//! Success response shapes

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portico_core::UpstreamResponse;
use serde_json::Value;

/// Successful gateway response: a verbatim upstream (or mock) JSON body,
/// or an empty 204 for delete-shaped operations.
#[derive(Debug)]
pub enum ApiResponse {
    Json(Value),
    /// 201 with a JSON body, used by create operations
    Created(Value),
    NoContent,
}

impl ApiResponse {
    /// Convert an upstream result, promoting a JSON body to 201
    pub fn created(upstream: UpstreamResponse) -> Self {
        match upstream {
            UpstreamResponse::Json(value) => Self::Created(value),
            UpstreamResponse::NoContent => Self::NoContent,
        }
    }
}

impl From<UpstreamResponse> for ApiResponse {
    fn from(upstream: UpstreamResponse) -> Self {
        match upstream {
            UpstreamResponse::Json(value) => Self::Json(value),
            UpstreamResponse::NoContent => Self::NoContent,
        }
    }
}

impl From<Value> for ApiResponse {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Json(value) => Json(value).into_response(),
            Self::Created(value) => (StatusCode::CREATED, Json(value)).into_response(),
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

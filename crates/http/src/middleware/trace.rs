//! Per-request logging
//!
//! One structured line per inbound request; the timestamp comes from the
//! subscriber's formatter.

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    info!(%method, %path, "request");
    next.run(req).await
}

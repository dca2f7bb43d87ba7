//! Access logging middleware.
//!
//! Tags every request with a fresh request id, echoes it back as
//! `x-request-id`, and logs method, path, status and duration.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use log::info;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn log_access(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started_at = Instant::now();

    let mut response = next.run(req).await;

    info!(
        "event=http_request module=api request_id={} method={} path={} status={} duration_ms={}",
        request_id,
        method,
        path,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

// Start of file: /src/middlewares/request_logger.rs

use std::time::Instant;
use axum::{
    body::Body,
    http::{Method, Request, Uri},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::info;

/// Logs method, path, status and latency of every request once the
/// inner service has produced a response.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start: Instant = Instant::now();
    let method: Method = req.method().clone();
    let uri: Uri = req.uri().clone();

    let response: Response = next.run(req).await;

    let duration_ms: u64 = start.elapsed().as_millis() as u64;

    info!(
        %method,
        path = uri.path(),
        status = response.status().as_u16(),
        elapsed_ms = duration_ms,
        date = %Utc::now().to_rfc3339(),
        "Request handled"
    );

    response
}

// End of file: /src/middlewares/request_logger.rs

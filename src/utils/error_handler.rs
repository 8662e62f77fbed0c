// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::warn;

/// Maps errors raised by the middleware stack to HTTP status codes.
/// Handlers themselves never fail; unmatched routes keep axum's defaults.
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // 408 if the request took too long
    if err.is::<Elapsed>() {
        warn!("Request timed out: {}", err);
        return StatusCode::REQUEST_TIMEOUT;
    }

    // Otherwise, 500
    warn!("Unhandled layer error: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR
}

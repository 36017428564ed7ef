//! Request/response logging.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Log method, path, status and latency of every request; warn on >= 400.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;
    if status >= 400 {
        warn!(method = %method, path = %path, status, duration_ms, "Request completed with error");
    } else {
        info!(method = %method, path = %path, status, duration_ms, "Request completed");
    }
    response
}

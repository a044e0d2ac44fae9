use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};

/// Logs every request with a per-request id, the matched route, the
/// response status and latency. Severity follows the status class.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status().as_u16();

    match status {
        400..=499 => warn!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status = %status,
            latency_ms = %latency.as_millis(),
            "Client error"
        ),
        500..=599 => error!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status = %status,
            latency_ms = %latency.as_millis(),
            "Server error"
        ),
        _ => info!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status = %status,
            latency_ms = %latency.as_millis(),
            "Request completed"
        ),
    }

    response
}

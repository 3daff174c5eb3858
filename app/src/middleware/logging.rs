//! Request logging.

use async_trait::async_trait;
use plinth::http::{Request, Response};
use plinth::middleware::{Middleware, Next};
use std::time::Instant;
use tracing::info;

/// Logs one line per request: method, path, status, latency.
pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(&self, req: Request, next: Next<'_>) -> Response {
        let method = req.method().clone();
        let path = req.path().to_string();
        let started = Instant::now();

        let response = next.run(req).await;

        let status = match &response {
            Ok(resp) | Err(resp) => resp.status_code(),
        };
        info!(
            %method,
            %path,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request handled"
        );
        response
    }
}

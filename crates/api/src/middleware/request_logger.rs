use axum::{extract::Request, middleware::Next, response::Response};
use std::time::{Duration, Instant};
use tracing::info;

const CONTEXT: &str = "HTTP";

/// Logs one event per request once the response is ready.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    info!(
        context = CONTEXT,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = whole_millis(started.elapsed()),
        "{} {} {}",
        method,
        path,
        response.status().as_u16()
    );

    response
}

fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

use crate::handlers;
use crate::middleware::{log_requests, security_headers};
use crate::state::AppState;
use axum::{middleware::from_fn, routing::get, Router};

/// Creates all API routes with state.
///
/// Every response passes through the security headers first, then the
/// request logger, so the logged status is the one the client receives.
pub fn create_api_routes(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(handlers::get_greeting))
        .route("/health", get(handlers::health_check));

    security_headers(router)
        .layer(from_fn(log_requests))
        .with_state(state)
}

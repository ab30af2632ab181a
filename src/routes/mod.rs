//! HTTP route handlers.
//!
//! Two routes are served: the greeting at `/` and the liveness probe at
//! `/health`. Every other path, and every unsupported method on a known path,
//! gets an empty 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{
    http::{
        header::{HeaderValue, CACHE_CONTROL},
        StatusCode,
    },
    middleware,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_id_layer;

/// Fallback for unmatched paths and methods.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Creates the Axum router with all routes.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get(health::health).fallback(not_found))
        .route_layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    let home_routes = Router::new().route("/", get(home::index).fallback(not_found));

    Router::new()
        .merge(health_routes)
        .merge(home_routes)
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

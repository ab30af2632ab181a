//! Request ID middleware for correlating logs with requests.
//!
//! Every incoming request is assigned a UUID v4 and processed inside a
//! `request` span, so all events emitted while handling it carry the same
//! `request_id`. The ID is also echoed to the client in `x-request-id`.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use axum::http::header::HeaderValue;
use tracing::Instrument;
use uuid::Uuid;

/// Response header carrying the request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware that assigns a request ID and wraps the request in a span.
///
/// Must be the outermost layer so the span covers all other middleware.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        // A hyphenated UUID is always a valid header value
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        response
    }
    .instrument(span)
    .await
}

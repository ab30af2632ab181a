//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK with a small JSON document
//! while the process is running. Used by Kubernetes, ECS, Docker healthchecks
//! and load balancers to verify the service is alive.

use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Status reported by a live process
pub const STATUS_OK: &str = "ok";

/// Body of a `/health` response.
///
/// Built fresh for every request; the timestamp is the wall-clock time at
/// construction, rendered as ISO-8601 UTC with millisecond precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
}

impl HealthStatus {
    /// Health status stamped with the current time.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Health status stamped with the given instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            status: STATUS_OK,
            timestamp: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Health check handler.
///
/// This is a liveness probe only: it checks that the process can respond to
/// HTTP and never fails.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::now())
}

//! hello-devops: a minimal HTTP service.
//!
//! Serves a plain-text greeting at `/` and a JSON liveness probe at `/health`.
//! The router and the server startup are exposed separately so the binary,
//! unit tests and integration tests all drive the same code.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::{ConfigError, HttpServerConfig, LogFormat};
pub use crate::http::{start_server, ServerError};
pub use routes::create_router;

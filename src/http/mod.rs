//! HTTP server module.
//!
//! Binds the listening socket and serves the router on it. Binding is split
//! from serving so callers (and tests) can learn the bound address before the
//! server starts accepting requests.

mod server;

pub use server::{bind, serve, start_server, ServerError};

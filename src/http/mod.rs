//! HTTP server module.
//!
//! The server includes:
//! - Plain HTTP serving (TLS termination is left to a fronting proxy)
//! - Graceful shutdown on SIGTERM/SIGINT with connection draining

mod server;
mod shutdown;

pub use server::{start_server, ServerError};

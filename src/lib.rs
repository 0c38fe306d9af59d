//! Credserver: a credential broker HTTP endpoint.
//!
//! Serves a fixed database credential record as JSON on the root path,
//! logging the full set of inbound request headers for inspection. The
//! record is built once at startup from configuration and never mutated.

pub mod config;
pub mod credentials;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use credentials::CredentialRecord;
pub use state::AppState;

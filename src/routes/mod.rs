//! HTTP route handlers.
//!
//! The credential route carries a `Cache-Control: no-store` header so no
//! intermediary ever retains a response body containing credentials. Request
//! tracing is enabled via middleware that generates a unique request ID for
//! each incoming request, allowing correlation of all logs within a request.

pub mod credentials;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL, SERVER};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_CREDENTIALS, SERVER_IDENT};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and response headers.
///
/// Unmatched paths and methods fall through to axum's default 404 handling.
pub fn create_router(state: AppState) -> Router {
    // Credential handout - never cacheable
    let credential_routes = Router::new()
        .route("/", get(credentials::issue))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_CREDENTIALS),
        ));

    // Health check - liveness probe for orchestrators
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(credential_routes)
        .merge(health_routes)
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            SERVER,
            HeaderValue::from_static(SERVER_IDENT),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

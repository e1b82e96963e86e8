//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `ANY /hello`        - Liveness check
//! - `ANY /shorten`      - Create a short link
//! - `ANY /{short_key}`  - Short link redirect
//!
//! Static routes win over the `{short_key}` parameter, so `/hello` and
//! `/shorten` are never treated as keys. Paths with more than one segment
//! fall through to the default 404.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::{hello_handler, resolve_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::any;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/hello", any(hello_handler))
        .route("/shorten", any(shorten_handler))
        .route("/{short_key}", any(resolve_handler))
        .with_state(state)
        .layer(tracing::layer())
}

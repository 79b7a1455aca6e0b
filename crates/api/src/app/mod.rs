//! HTTP application wiring (Axum router + middleware).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: error type and consistent error responses

use axum::{extract::DefaultBodyLimit, Extension, Router};
use tower::ServiceBuilder;

use crate::context::RenderContext;
use crate::middleware;

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Request bodies are not size limited; an invoice of any length is accepted.
pub fn build_app(ctx: RenderContext) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::cors_middleware))
            .layer(DefaultBodyLimit::disable())
            .layer(Extension(ctx)),
    )
}

use axum::{routing::get, Router};

pub mod invoices;
pub mod system;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/api", invoices::router())
        .fallback(system::not_found)
}

//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: storage backend selection and use-case construction
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and query parsing
//! - `errors.rs`: consistent error responses
//! - `docs.rs`: OpenAPI document served under `/swagger`

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod docs;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::docs_router())
        .nest("/api/v1", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(services)),
        )
}

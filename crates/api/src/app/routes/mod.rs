use axum::{Router, routing::get};

pub mod docs;
pub mod products;
pub mod system;

/// Router for the versioned API.
pub fn router() -> Router {
    Router::new().nest("/products", products::router())
}

/// Swagger UI plus the generated OpenAPI document.
pub fn docs_router() -> Router {
    Router::new()
        .route("/swagger", get(docs::swagger_ui))
        .route("/swagger/", get(docs::swagger_ui))
        .route(docs::OPENAPI_PATH, get(docs::openapi_json))
}

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use catalog_products::{PaginatedProducts, ProductInput, ProductOutput, StatusChange};

use crate::app::services::AppServices;
use crate::app::errors::ErrorBody;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/:id/enable", post(enable_product))
        .route("/:id/disable", post(disable_product))
}

fn body_rejection(rejection: JsonRejection) -> axum::response::Response {
    tracing::warn!(error = %rejection.body_text(), "malformed request body");
    errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = ProductOutput),
        (status = 400, description = "Invalid body or product", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> axum::response::Response {
    let Json(input) = match body {
        Ok(b) => b,
        Err(rejection) => return body_rejection(rejection),
    };

    match services.create_product().execute(input).await {
        Ok(output) => (StatusCode::CREATED, Json(output)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "products",
    params(dto::ListParams),
    responses(
        (status = 200, description = "One page of products", body = PaginatedProducts),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<dto::ListParams>, QueryRejection>,
) -> axum::response::Response {
    let params = match params {
        Ok(Query(p)) => p,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "ignoring malformed list query");
            dto::ListParams::default()
        }
    };
    let input = params.into_input();
    let (page, limit) = (input.page, input.limit);

    match services.list_products().execute(input).await {
        Ok(output) => {
            let body = PaginatedProducts::new(output.products, output.total_count, page, limit);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductOutput),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.get_product().execute(&id).await {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    request_body = dto::UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductOutput),
        (status = 400, description = "Invalid body or product", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(request) = match body {
        Ok(b) => b,
        Err(rejection) => return body_rejection(rejection),
    };

    match services.update_product().execute(request.into_input(id)).await {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.delete_product().execute(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/enable",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product after enabling; free products stay disabled", body = ProductOutput),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn enable_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    change_status(&services, &id, StatusChange::Enable).await
}

#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/disable",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product disabled", body = ProductOutput),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn disable_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    change_status(&services, &id, StatusChange::Disable).await
}

async fn change_status(
    services: &AppServices,
    id: &str,
    change: StatusChange,
) -> axum::response::Response {
    match services.change_product_status().execute(id, change).await {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

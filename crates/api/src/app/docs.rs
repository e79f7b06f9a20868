//! OpenAPI document for the product routes.

use utoipa::OpenApi;

use catalog_products::{PaginatedProducts, ProductInput, ProductOutput, ProductStatus};

use crate::app::dto::UpdateProductRequest;
use crate::app::errors::ErrorBody;
use crate::app::routes::products;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product catalog API",
        version = "1.0",
        description = "CRUD operations over the product catalog"
    ),
    paths(
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product,
        products::enable_product,
        products::disable_product,
    ),
    components(schemas(
        ProductInput,
        ProductOutput,
        ProductStatus,
        PaginatedProducts,
        UpdateProductRequest,
        ErrorBody,
    )),
    tags((name = "products", description = "Product catalog management"))
)]
pub struct ApiDoc;

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use catalog_products::{ListProductsInput, ProductUpdateInput};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_SORT: &str = "id";

// -------------------------
// Request DTOs
// -------------------------

/// Body of `PUT /products/{id}`; the id comes from the path.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
}

impl UpdateProductRequest {
    pub fn into_input(self, id: String) -> ProductUpdateInput {
        ProductUpdateInput {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// Raw list query. Kept as strings so malformed numbers fall back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Page number, 1-based (default 1)
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
    /// Page size (default 10)
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
    /// Sort field: `id`, `name` or `price` (default `id`)
    pub sort: Option<String>,
}

impl ListParams {
    pub fn into_input(self) -> ListProductsInput {
        ListProductsInput {
            page: positive_or(self.page.as_deref(), DEFAULT_PAGE),
            limit: positive_or(self.limit.as_deref(), DEFAULT_LIMIT),
            sort: self
                .sort
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SORT.to_string()),
        }
    }
}

fn positive_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v >= 1)
        .unwrap_or(default)
}

//! Data-transfer shapes crossing the application boundary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use catalog_core::Entity;

use crate::product::{Product, ProductStatus};

/// Input for creating a product.
///
/// Absent fields decode to their zero values and are left to the entity's
/// validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
}

/// Input for updating an existing product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdateInput {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
}

/// Product as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductOutput {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub status: ProductStatus,
}

impl From<&Product> for ProductOutput {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price: product.price(),
            status: product.status(),
        }
    }
}

/// Paginated list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedProducts {
    pub products: Vec<ProductOutput>,
    pub total_count: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

impl PaginatedProducts {
    pub fn new(products: Vec<ProductOutput>, total_count: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total_count.div_ceil(u64::from(limit))
        };
        Self {
            products,
            total_count,
            page,
            limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn output_wire_shape() {
        let product = Product::new("Lamp", "Desk lamp", 25.5).unwrap();
        let out = ProductOutput::from(&product);
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "id": product.id().to_string(),
                "name": "Lamp",
                "description": "Desk lamp",
                "price": 25.5,
                "status": "disabled",
            })
        );
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PaginatedProducts::new(vec![], 5, 1, 3).total_pages, 2);
        assert_eq!(PaginatedProducts::new(vec![], 6, 1, 3).total_pages, 2);
        assert_eq!(PaginatedProducts::new(vec![], 0, 1, 10).total_pages, 0);
        assert_eq!(PaginatedProducts::new(vec![], 1, 1, 10).total_pages, 1);
    }

    #[test]
    fn paginated_wire_shape() {
        let value = serde_json::to_value(PaginatedProducts::new(vec![], 11, 2, 5)).unwrap();
        assert_eq!(
            value,
            json!({
                "products": [],
                "total_count": 11,
                "page": 2,
                "limit": 5,
                "total_pages": 3,
            })
        );
    }

    #[test]
    fn input_description_is_optional() {
        let input: ProductInput = serde_json::from_value(json!({"name": "Lamp", "price": 1.0})).unwrap();
        assert_eq!(input.description, "");
    }

    #[test]
    fn missing_price_decodes_as_zero() {
        let input: ProductInput = serde_json::from_value(json!({"name": "Free"})).unwrap();
        assert_eq!(input.price, 0.0);
        assert!(Product::new(input.name, input.description, input.price).is_ok());
    }

    #[test]
    fn missing_name_reaches_validation() {
        let input: ProductInput = serde_json::from_value(json!({"price": 1.0})).unwrap();
        assert_eq!(input.name, "");
        assert_eq!(
            Product::new(input.name, input.description, input.price).unwrap_err(),
            catalog_core::ValidationError::EmptyName
        );
    }

    #[test]
    fn update_input_fields_default() {
        let input: ProductUpdateInput = serde_json::from_value(json!({"id": "p-1"})).unwrap();
        assert_eq!(input.name, "");
        assert_eq!(input.description, "");
        assert_eq!(input.price, 0.0);
    }
}

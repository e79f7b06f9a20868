//! Storage boundary for products.

use async_trait::async_trait;

use catalog_core::DomainResult;

use crate::product::{Product, ProductId};

/// Sortable columns for listing.
///
/// Anything outside the allow-list falls back to `Id`; bad sort input is
/// never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Id,
    Name,
    Price,
}

impl SortField {
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "name" => SortField::Name,
            "price" => SortField::Price,
            _ => SortField::Id,
        }
    }

    /// Column name in the relational schema.
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Price => "price",
        }
    }
}

/// One page of products plus the unfiltered row count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total_count: u64,
}

/// Row offset for a 1-based page. Page 0 is treated as page 1.
pub fn page_offset(page: u32, limit: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(limit)
}

/// Persistence contract consumed by the use cases.
///
/// Implementations must report a missing record as `DomainError::NotFound`
/// and any driver failure as `DomainError::Storage`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> DomainResult<()>;

    /// Persist name, description, price and status of an existing product.
    async fn update(&self, product: &Product) -> DomainResult<()>;

    async fn get_by_id(&self, id: &ProductId) -> DomainResult<Product>;

    /// List one page ordered ascending by `sort`.
    async fn list(&self, page: u32, limit: u32, sort: SortField) -> DomainResult<ProductPage>;

    async fn delete(&self, id: &ProductId) -> DomainResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_allow_list() {
        assert_eq!(SortField::from_param("id"), SortField::Id);
        assert_eq!(SortField::from_param("name"), SortField::Name);
        assert_eq!(SortField::from_param("price"), SortField::Price);
    }

    #[test]
    fn unknown_sort_falls_back_to_id() {
        assert_eq!(SortField::from_param(""), SortField::Id);
        assert_eq!(SortField::from_param("status; DROP TABLE products"), SortField::Id);
        assert_eq!(SortField::from_param("Price"), SortField::Id);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(page_offset(1, 3), 0);
        assert_eq!(page_offset(2, 3), 3);
        assert_eq!(page_offset(0, 10), 0);
    }
}

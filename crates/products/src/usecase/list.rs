use std::sync::Arc;

use catalog_core::DomainResult;

use crate::dto::ProductOutput;
use crate::repository::{ProductRepository, SortField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProductsInput {
    pub page: u32,
    pub limit: u32,
    /// Requested sort column; unknown values sort by id.
    pub sort: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListProductsOutput {
    pub products: Vec<ProductOutput>,
    pub total_count: u64,
}

/// List one page of products.
pub struct ListProducts {
    repository: Arc<dyn ProductRepository>,
}

impl ListProducts {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: ListProductsInput) -> DomainResult<ListProductsOutput> {
        let sort = SortField::from_param(&input.sort);
        let page = self.repository.list(input.page, input.limit, sort).await?;

        Ok(ListProductsOutput {
            products: page.products.iter().map(ProductOutput::from).collect(),
            total_count: page.total_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockProductRepository, ProductPage};
    use crate::usecase::test_support::{into_repo, stored_product};
    use catalog_core::DomainError;

    #[tokio::test]
    async fn maps_each_product_and_keeps_total() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .withf(|page, limit, sort| *page == 2 && *limit == 3 && *sort == SortField::Price)
            .returning(|_, _, _| {
                Ok(ProductPage {
                    products: vec![
                        stored_product("a", "A", 1.0, "disabled"),
                        stored_product("b", "B", 2.0, "enabled"),
                    ],
                    total_count: 5,
                })
            });

        let out = ListProducts::new(into_repo(repo))
            .execute(ListProductsInput {
                page: 2,
                limit: 3,
                sort: "price".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(out.products.len(), 2);
        assert_eq!(out.products[0].id, "a");
        assert_eq!(out.products[1].id, "b");
        assert_eq!(out.total_count, 5);
    }

    #[tokio::test]
    async fn unknown_sort_is_passed_as_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .withf(|_, _, sort| *sort == SortField::Id)
            .times(1)
            .returning(|_, _, _| Ok(ProductPage::default()));

        let out = ListProducts::new(into_repo(repo))
            .execute(ListProductsInput {
                page: 1,
                limit: 10,
                sort: "created_at".to_string(),
            })
            .await
            .unwrap();

        assert!(out.products.is_empty());
        assert_eq!(out.total_count, 0);
    }

    #[tokio::test]
    async fn storage_error_propagates() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .returning(|_, _, _| Err(DomainError::storage("timeout")));

        let err = ListProducts::new(into_repo(repo))
            .execute(ListProductsInput {
                page: 1,
                limit: 10,
                sort: "id".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::storage("timeout"));
    }
}

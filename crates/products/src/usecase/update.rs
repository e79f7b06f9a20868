use std::sync::Arc;

use catalog_core::DomainResult;

use crate::dto::{ProductOutput, ProductUpdateInput};
use crate::product::ProductId;
use crate::repository::ProductRepository;

/// Load a product, apply new name/description/price and persist.
pub struct UpdateProduct {
    repository: Arc<dyn ProductRepository>,
}

impl UpdateProduct {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Nothing is persisted unless both `update` and `change_price` succeed.
    pub async fn execute(&self, input: ProductUpdateInput) -> DomainResult<ProductOutput> {
        let id = ProductId::from_string(input.id);
        let mut product = self.repository.get_by_id(&id).await?;

        product.update(input.name, input.description)?;
        product.change_price(input.price)?;

        self.repository.update(&product).await?;
        Ok(ProductOutput::from(&product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductStatus;
    use crate::repository::MockProductRepository;
    use crate::usecase::test_support::{into_repo, stored_product};
    use catalog_core::{DomainError, ValidationError};

    fn input(name: &str, price: f64) -> ProductUpdateInput {
        ProductUpdateInput {
            id: "p-1".to_string(),
            name: name.to_string(),
            description: "New Description".to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn applies_changes_and_persists_once() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(stored_product("p-1", "Original", 100.0, "enabled")));
        repo.expect_update()
            .withf(|p| {
                p.name() == "Updated" && p.price() == 150.0 && p.status() == ProductStatus::Enabled
            })
            .times(1)
            .returning(|_| Ok(()));

        let out = UpdateProduct::new(into_repo(repo))
            .execute(input("Updated", 150.0))
            .await
            .unwrap();

        assert_eq!(out.id, "p-1");
        assert_eq!(out.name, "Updated");
        assert_eq!(out.description, "New Description");
        assert_eq!(out.price, 150.0);
        assert_eq!(out.status, ProductStatus::Enabled);
    }

    #[tokio::test]
    async fn invalid_name_is_not_persisted() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(stored_product("p-1", "Original", 100.0, "disabled")));
        repo.expect_update().never();

        let err = UpdateProduct::new(into_repo(repo))
            .execute(input("", 150.0))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::Validation(ValidationError::EmptyName));
    }

    #[tokio::test]
    async fn invalid_price_is_not_persisted() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(stored_product("p-1", "Original", 100.0, "disabled")));
        repo.expect_update().never();

        let err = UpdateProduct::new(into_repo(repo))
            .execute(input("Updated", -5.0))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::Validation(ValidationError::NegativePrice));
    }

    #[tokio::test]
    async fn missing_product_stops_before_mutation() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Err(DomainError::not_found()));
        repo.expect_update().never();

        let err = UpdateProduct::new(into_repo(repo))
            .execute(input("Updated", 1.0))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}

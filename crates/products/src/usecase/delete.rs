use std::sync::Arc;

use catalog_core::DomainResult;

use crate::product::ProductId;
use crate::repository::ProductRepository;

/// Remove a product.
pub struct DeleteProduct {
    repository: Arc<dyn ProductRepository>,
}

impl DeleteProduct {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> DomainResult<()> {
        self.repository.delete(&ProductId::from_string(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use crate::usecase::test_support::into_repo;
    use catalog_core::DomainError;

    #[tokio::test]
    async fn delegates_to_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete()
            .withf(|id| id.as_str() == "p-1")
            .times(1)
            .returning(|_| Ok(()));

        DeleteProduct::new(into_repo(repo)).execute("p-1").await.unwrap();
    }

    #[tokio::test]
    async fn absent_id_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete()
            .returning(|_| Err(DomainError::not_found()));

        let err = DeleteProduct::new(into_repo(repo)).execute("gone").await.unwrap_err();

        assert!(err.is_not_found());
    }
}

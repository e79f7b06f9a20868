use std::sync::Arc;

use catalog_core::DomainResult;

use crate::dto::ProductOutput;
use crate::product::ProductId;
use crate::repository::ProductRepository;

/// Load a single product.
pub struct GetProduct {
    repository: Arc<dyn ProductRepository>,
}

impl GetProduct {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> DomainResult<ProductOutput> {
        let product = self
            .repository
            .get_by_id(&ProductId::from_string(id))
            .await?;
        Ok(ProductOutput::from(&product))
    }
}

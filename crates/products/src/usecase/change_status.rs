use std::sync::Arc;

use catalog_core::DomainResult;

use crate::dto::ProductOutput;
use crate::product::ProductId;
use crate::repository::ProductRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    Enable,
    Disable,
}

/// Enable or disable a stored product.
pub struct ChangeProductStatus {
    repository: Arc<dyn ProductRepository>,
}

impl ChangeProductStatus {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str, change: StatusChange) -> DomainResult<ProductOutput> {
        let mut product = self
            .repository
            .get_by_id(&ProductId::from_string(id))
            .await?;

        match change {
            StatusChange::Enable => product.enable()?,
            StatusChange::Disable => product.disable()?,
        }

        self.repository.update(&product).await?;
        Ok(ProductOutput::from(&product))
    }
}

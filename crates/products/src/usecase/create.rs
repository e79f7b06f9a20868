use std::sync::Arc;

use catalog_core::DomainResult;

use crate::dto::{ProductInput, ProductOutput};
use crate::product::Product;
use crate::repository::ProductRepository;

/// Construct a product and persist it.
pub struct CreateProduct {
    repository: Arc<dyn ProductRepository>,
}

impl CreateProduct {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Invalid input is returned as a validation error before storage is touched.
    pub async fn execute(&self, input: ProductInput) -> DomainResult<ProductOutput> {
        let product = Product::new(input.name, input.description, input.price)?;
        self.repository.create(&product).await?;
        Ok(ProductOutput::from(&product))
    }
}

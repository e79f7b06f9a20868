use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::instrument;

use catalog_core::{DomainError, DomainResult, Entity};
use catalog_products::{Product, ProductId, ProductPage, ProductRepository, SortField, page_offset};

/// In-memory product store for tests/dev.
///
/// Holds entity clones keyed by id; last write wins for concurrent updates.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> DomainError {
        DomainError::storage("in-memory store lock poisoned")
    }
}

fn compare(a: &Product, b: &Product, sort: SortField) -> Ordering {
    let primary = match sort {
        SortField::Id => Ordering::Equal,
        // Byte order, same as `COLLATE "C"` in Postgres.
        SortField::Name => a.name().cmp(b.name()),
        SortField::Price => a.price().total_cmp(&b.price()),
    };
    primary.then_with(|| a.id().cmp(b.id()))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(level = "debug", skip(self, product), fields(product_id = %product.id()))]
    async fn create(&self, product: &Product) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;
        if map.contains_key(product.id()) {
            return Err(DomainError::storage(format!(
                "product {} already exists",
                product.id()
            )));
        }
        map.insert(product.id().clone(), product.clone());
        Ok(())
    }

    #[instrument(level = "debug", skip(self, product), fields(product_id = %product.id()))]
    async fn update(&self, product: &Product) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;
        match map.get_mut(product.id()) {
            Some(stored) => {
                *stored = product.clone();
                Ok(())
            }
            None => Err(DomainError::not_found()),
        }
    }

    #[instrument(level = "debug", skip(self), fields(product_id = %id))]
    async fn get_by_id(&self, id: &ProductId) -> DomainResult<Product> {
        let map = self.inner.read().map_err(|_| Self::poisoned())?;
        map.get(id).cloned().ok_or_else(DomainError::not_found)
    }

    #[instrument(level = "debug", skip(self))]
    async fn list(&self, page: u32, limit: u32, sort: SortField) -> DomainResult<ProductPage> {
        let map = self.inner.read().map_err(|_| Self::poisoned())?;

        let mut all: Vec<&Product> = map.values().collect();
        all.sort_by(|a, b| compare(a, b, sort));

        let offset = usize::try_from(page_offset(page, limit)).unwrap_or(usize::MAX);
        let products = all
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(ProductPage {
            products,
            total_count: map.len() as u64,
        })
    }

    #[instrument(level = "debug", skip(self), fields(product_id = %id))]
    async fn delete(&self, id: &ProductId) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;
        map.remove(id).map(|_| ()).ok_or_else(DomainError::not_found)
    }
}

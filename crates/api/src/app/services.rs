use std::sync::Arc;

use anyhow::Context;

use catalog_infra::{InMemoryProductRepository, PostgresProductRepository, Settings, StorageDriver};
use catalog_products::{
    ChangeProductStatus, CreateProduct, DeleteProduct, GetProduct, ListProducts, ProductRepository,
    UpdateProduct,
};

/// Shared request-independent state: one repository behind every use case.
#[derive(Clone)]
pub struct AppServices {
    repository: Arc<dyn ProductRepository>,
}

impl AppServices {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// In-memory wiring (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductRepository::new()))
    }

    pub fn create_product(&self) -> CreateProduct {
        CreateProduct::new(self.repository.clone())
    }

    pub fn get_product(&self) -> GetProduct {
        GetProduct::new(self.repository.clone())
    }

    pub fn list_products(&self) -> ListProducts {
        ListProducts::new(self.repository.clone())
    }

    pub fn update_product(&self) -> UpdateProduct {
        UpdateProduct::new(self.repository.clone())
    }

    pub fn delete_product(&self) -> DeleteProduct {
        DeleteProduct::new(self.repository.clone())
    }

    pub fn change_product_status(&self) -> ChangeProductStatus {
        ChangeProductStatus::new(self.repository.clone())
    }
}

/// Select the storage backend from configuration.
///
/// - `DB_DRIVER=memory` (default): process-local map.
/// - `DB_DRIVER=postgres`: connection pool plus schema bootstrap.
pub async fn build_services(settings: &Settings) -> anyhow::Result<AppServices> {
    match settings.db_driver {
        StorageDriver::Memory => {
            tracing::warn!("using in-memory storage; data is lost on restart");
            Ok(AppServices::in_memory())
        }
        StorageDriver::Postgres => {
            let options = settings.connect_options()?;
            let repository = PostgresProductRepository::connect_with(options, settings.db_max_connections)
                .await
                .context("failed to connect to Postgres")?;
            repository
                .migrate()
                .await
                .context("failed to apply products schema")?;

            tracing::info!("connected to Postgres");
            Ok(AppServices::new(Arc::new(repository)))
        }
    }
}

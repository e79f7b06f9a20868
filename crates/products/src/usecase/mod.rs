//! Application use cases.
//!
//! Each use case holds a shared repository handle, is stateless otherwise,
//! and returns errors unchanged: no retries, no logging.

mod change_status;
mod create;
mod delete;
mod get;
mod list;
mod update;

pub use change_status::{ChangeProductStatus, StatusChange};
pub use create::CreateProduct;
pub use delete::DeleteProduct;
pub use get::GetProduct;
pub use list::{ListProducts, ListProductsInput, ListProductsOutput};
pub use update::UpdateProduct;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::product::{Product, ProductId};
    use crate::repository::{MockProductRepository, ProductRepository};

    pub fn stored_product(id: &str, name: &str, price: f64, status: &str) -> Product {
        Product::reconstitute(ProductId::from_string(id), name, "stored", price, status).unwrap()
    }

    pub fn into_repo(mock: MockProductRepository) -> Arc<dyn ProductRepository> {
        Arc::new(mock)
    }
}

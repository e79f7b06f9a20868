//! Products module: catalog entity, storage boundary and use cases.
//!
//! Domain rules live in [`product`]; the use cases orchestrate them against
//! any [`ProductRepository`] implementation (no IO here, no HTTP).

pub mod dto;
pub mod product;
pub mod repository;
pub mod usecase;

pub use dto::{PaginatedProducts, ProductInput, ProductOutput, ProductUpdateInput};
pub use product::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, Product, ProductId, ProductStatus};
pub use repository::{ProductPage, ProductRepository, SortField, page_offset};
pub use usecase::{
    ChangeProductStatus, CreateProduct, DeleteProduct, GetProduct, ListProducts,
    ListProductsInput, ListProductsOutput, StatusChange, UpdateProduct,
};

//! Product storage adapters.
//!
//! Both implementations satisfy [`catalog_products::ProductRepository`], so the
//! use cases can run against either without change.

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryProductRepository;
pub use postgres::PostgresProductRepository;

//! Infrastructure layer: storage adapters and configuration.

pub mod config;
pub mod repository;

pub use config::{ConfigError, Settings, StorageDriver};
pub use repository::{InMemoryProductRepository, PostgresProductRepository};

//! Postgres-backed product repository.
//!
//! ## Error Mapping
//!
//! | SQLx Error | DomainError | Scenario |
//! |------------|-------------|----------|
//! | `RowNotFound` | `NotFound` | `fetch_one` on a missing id |
//! | Database (any code) | `Storage` | constraint violations, bad SQL |
//! | `PoolClosed`, IO, TLS, ... | `Storage` | connection failures |
//!
//! Ids that are not UUIDs cannot exist in the `UUID` primary key column, so
//! lookups and deletes report them as `NotFound` without a round trip.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::{FromRow, PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use catalog_core::{DomainError, DomainResult, Entity};
use catalog_products::{Product, ProductId, ProductPage, ProductRepository, SortField, page_offset};

const SCHEMA_SQL: &str = include_str!("sql/schema.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");

/// Postgres-backed product repository.
///
/// Uses the SQLx connection pool, which is `Send + Sync`; each query checks a
/// connection out and returns it on every exit path.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool with the given connection options.
    pub async fn connect_with(
        options: PgConnectOptions,
        max_connections: u32,
    ) -> DomainResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        Ok(Self::new(pool))
    }

    /// Create the `products` table if it does not exist.
    #[instrument(skip(self), err)]
    pub async fn migrate(&self) -> DomainResult<()> {
        sqlx::query(SCHEMA_SQL)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("migrate", e))?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id()), err)]
    async fn create(&self, product: &Product) -> DomainResult<()> {
        let id = require_uuid(product.id())?;

        sqlx::query(CREATE_PRODUCT_SQL)
            .bind(id)
            .bind(product.name())
            .bind(product.description())
            .bind(product.price())
            .bind(product.status().as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("create_product", e))?;

        Ok(())
    }

    #[instrument(skip(self, product), fields(product_id = %product.id()), err)]
    async fn update(&self, product: &Product) -> DomainResult<()> {
        let Some(id) = product.id().0.to_uuid() else {
            return Err(DomainError::not_found());
        };

        let result = sqlx::query(UPDATE_PRODUCT_SQL)
            .bind(id)
            .bind(product.name())
            .bind(product.description())
            .bind(product.price())
            .bind(product.status().as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("update_product", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found());
        }
        Ok(())
    }

    #[instrument(skip(self), fields(product_id = %id), err)]
    async fn get_by_id(&self, id: &ProductId) -> DomainResult<Product> {
        let Some(uuid) = id.0.to_uuid() else {
            return Err(DomainError::not_found());
        };

        let row = sqlx::query_as::<_, ProductRow>(GET_PRODUCT_SQL)
            .bind(uuid)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_product", e))?;

        row.into_product()
    }

    #[instrument(skip(self), fields(sort = sort.column()), err)]
    async fn list(&self, page: u32, limit: u32, sort: SortField) -> DomainResult<ProductPage> {
        let total: i64 = sqlx::query(COUNT_PRODUCTS_SQL)
            .fetch_one(&self.pool)
            .await
            .and_then(|row| row.try_get("total"))
            .map_err(|e| map_sqlx_error("count_products", e))?;

        let offset = i64::try_from(page_offset(page, limit)).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, ProductRow>(&list_sql(sort))
            .bind(i64::from(limit))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_products", e))?;

        let products = rows
            .into_iter()
            .map(ProductRow::into_product)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(ProductPage {
            products,
            total_count: u64::try_from(total).unwrap_or(0),
        })
    }

    #[instrument(skip(self), fields(product_id = %id), err)]
    async fn delete(&self, id: &ProductId) -> DomainResult<()> {
        let Some(uuid) = id.0.to_uuid() else {
            return Err(DomainError::not_found());
        };

        let result = sqlx::query(DELETE_PRODUCT_SQL)
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_product", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found());
        }
        Ok(())
    }
}

/// Listing query for an allow-listed sort column.
///
/// Names sort by the "C" collation (byte order) so the result does not depend
/// on the database locale and matches the in-memory store.
fn list_sql(sort: SortField) -> String {
    let order = match sort {
        SortField::Id => "id ASC".to_string(),
        SortField::Name => "name COLLATE \"C\" ASC, id ASC".to_string(),
        SortField::Price => "price ASC, id ASC".to_string(),
    };
    format!(
        "SELECT id, name, description, price, status FROM products ORDER BY {order} LIMIT $1 OFFSET $2"
    )
}

fn require_uuid(id: &ProductId) -> DomainResult<Uuid> {
    id.0
        .to_uuid()
        .ok_or_else(|| DomainError::storage(format!("product id {id} is not a UUID")))
}

/// Map SQLx errors to `DomainError`.
fn map_sqlx_error(operation: &str, err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::not_found(),
        sqlx::Error::Database(db_err) => DomainError::storage(format!(
            "database error in {operation}: {}",
            db_err.message()
        )),
        sqlx::Error::PoolClosed => {
            DomainError::storage(format!("connection pool closed in {operation}"))
        }
        other => DomainError::storage(format!("sqlx error in {operation}: {other}")),
    }
}

// SQLx row types

#[derive(Debug)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    price: f64,
    status: String,
}

impl<'r> FromRow<'r, PgRow> for ProductRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(ProductRow {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            status: row.try_get("status")?,
        })
    }
}

impl ProductRow {
    fn into_product(self) -> DomainResult<Product> {
        let id = ProductId::from_string(self.id.to_string());
        Product::reconstitute(
            id.clone(),
            self.name,
            self.description.unwrap_or_default(),
            self.price,
            &self.status,
        )
        .map_err(|e| DomainError::storage(format!("stored product {id} is invalid: {e}")))
    }
}

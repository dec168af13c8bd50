use thiserror::Error;

use crate::{db::DbPool, models::Product, update_clause::UpdateClause, validation::NewProduct};

/// Column list for `products` queries.
const PRODUCT_COLUMNS: &str = "id, name, price, stock, created_at, updated_at";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("product not found")]
    NotFound,

    /// The database refused the values (constraint or data exception).
    #[error("rejected by database: {0}")]
    Rejected(#[source] sqlx::Error),

    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) => {
                // SQLSTATE class 22: data exception, class 23: integrity violation.
                // Both mean the caller's values were refused, so they surface as
                // a 400 even on insert instead of a 500.
                let rejected = db_err
                    .code()
                    .is_some_and(|code| code.starts_with("22") || code.starts_with("23"));
                if rejected {
                    StoreError::Rejected(err)
                } else {
                    StoreError::Unavailable(err)
                }
            }
            _ => StoreError::Unavailable(err),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence gateway for the `products` table.
#[derive(Debug, Clone)]
pub struct ProductStore {
    pool: DbPool,
}

impl ProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All products, most recently created first. Empty is not an error.
    pub async fn list_all(&self) -> StoreResult<Vec<Product>> {
        let query =
            format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC, id DESC");
        let products = sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    pub async fn get_by_id(&self, id: i32) -> StoreResult<Product> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Insert a product; id and both timestamps come from the database.
    pub async fn create(&self, product: &NewProduct) -> StoreResult<Product> {
        let query = format!(
            "INSERT INTO products (name, price, stock) VALUES ($1, $2, $3) \
             RETURNING {PRODUCT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Product>(&query)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.stock)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(product_id = created.id, "product created");
        Ok(created)
    }

    pub async fn exists_by_id(&self, id: i32) -> StoreResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Apply `clause` to product `id`. Zero affected rows is `NotFound`, which
    /// covers a delete racing in after the caller's existence check.
    pub async fn update(&self, id: i32, clause: &UpdateClause) -> StoreResult<Product> {
        let mut statement = clause.statement(id, PRODUCT_COLUMNS);
        let updated = statement
            .build_query_as::<Product>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)?;

        tracing::info!(
            product_id = id,
            columns = ?clause.changed_columns(),
            "product updated"
        );
        Ok(updated)
    }

    /// Permanently remove product `id`, echoing the id back.
    pub async fn delete(&self, id: i32) -> StoreResult<i32> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        tracing::info!(product_id = id, "product deleted");
        Ok(id)
    }
}

//! # Product Repository
//!
//! The store behind the inventory form: one table, five statements.
//!
//! ## Statements
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  insert    INSERT INTO products (...) VALUES (?1 .. ?5)                 │
//! │            duplicate id ──► DbError::UniqueViolation                    │
//! │                                                                         │
//! │  update    UPDATE products SET ... WHERE product_id = ?1                │
//! │            0 rows ──► DbError::NotFound                                 │
//! │                                                                         │
//! │  delete    DELETE FROM products WHERE product_id = ?1                   │
//! │            0 rows ──► Ok(false), not an error                           │
//! │                                                                         │
//! │  get       SELECT ... WHERE product_id = ?1  ──► Option<Product>        │
//! │                                                                         │
//! │  list_all  SELECT ... (storage order, no ORDER BY)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::Product;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// repo.insert(&Product::new(1, "Widget", 10, 2.50, 4.5)).await?;
/// let widget = repo.get(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(())` - Row committed
    /// * `Err(DbError::UniqueViolation)` - `product_id` already exists
    /// * `Err(_)` - Any other storage failure
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(product_id = product.product_id, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (product_id, name, quantity, price_per_unit, rating)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(product.product_id)
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price_per_unit)
        .bind(product.rating)
        .execute(&self.pool)
        .await
        .map_err(|err| match DbError::from(err) {
            DbError::UniqueViolation { .. } => {
                DbError::duplicate("product_id", product.product_id.to_string())
            }
            other => other,
        })?;

        Ok(())
    }

    /// Overwrites every field of an existing product except its id.
    ///
    /// ## Returns
    /// * `Ok(())` - Row updated
    /// * `Err(DbError::NotFound)` - No row has this id
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(product_id = product.product_id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                quantity = ?3,
                price_per_unit = ?4,
                rating = ?5
            WHERE product_id = ?1
            "#,
        )
        .bind(product.product_id)
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price_per_unit)
        .bind(product.rating)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(
                "Product",
                product.product_id.to_string(),
            ));
        }

        Ok(())
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// `true` if a row was removed, `false` if there was nothing to delete.
    pub async fn delete(&self, product_id: i64) -> DbResult<bool> {
        debug!(product_id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE product_id = ?1")
            .bind(product_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get(&self, product_id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, quantity, price_per_unit, rating
            FROM products
            WHERE product_id = ?1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists every product in the order SQLite returns them.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, quantity, price_per_unit, rating
            FROM products
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Counts products (for the seed tool and diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    async fn repo() -> ProductRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
    }

    fn widget() -> Product {
        Product::new(1, "Widget", 10, 2.50, 4.5)
    }

    fn gadget() -> Product {
        Product::new(2, "Gadget", 3, 9.99, 3.0)
    }

    #[tokio::test]
    async fn test_insert_then_list() {
        let repo = repo().await;
        repo.insert(&widget()).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all, vec![widget()]);
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_rejected() {
        let repo = repo().await;
        repo.insert(&widget()).await.unwrap();

        let clash = Product::new(1, "Impostor", 1, 1.0, 1.0);
        let err = repo.insert(&clash).await.unwrap_err();
        match err {
            DbError::UniqueViolation { field, value } => {
                assert_eq!(field, "product_id");
                assert_eq!(value, "1");
            }
            other => panic!("expected UniqueViolation, got {other:?}"),
        }

        assert_eq!(repo.list_all().await.unwrap(), vec![widget()]);
    }

    #[tokio::test]
    async fn test_update_changes_only_that_row() {
        let repo = repo().await;
        repo.insert(&widget()).await.unwrap();
        repo.insert(&gadget()).await.unwrap();

        let changed = Product::new(1, "Widget Pro", 7, 3.25, 5.0);
        repo.update(&changed).await.unwrap();

        assert_eq!(repo.get(1).await.unwrap(), Some(changed));
        assert_eq!(repo.get(2).await.unwrap(), Some(gadget()));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = repo().await;

        let err = repo.update(&widget()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo().await;
        repo.insert(&widget()).await.unwrap();
        repo.insert(&gadget()).await.unwrap();

        assert!(repo.delete(1).await.unwrap());
        assert_eq!(repo.get(1).await.unwrap(), None);
        assert_eq!(repo.list_all().await.unwrap(), vec![gadget()]);

        // Deleting again is not an error.
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_id_can_be_reused_after_delete() {
        let repo = repo().await;
        repo.insert(&widget()).await.unwrap();
        repo.delete(1).await.unwrap();

        let replacement = Product::new(1, "Sprocket", 2, 1.5, 2.0);
        repo.insert(&replacement).await.unwrap();
        assert_eq!(repo.get(1).await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = repo().await;
        assert_eq!(repo.get(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unvalidated_values_are_stored_as_given() {
        let repo = repo().await;
        let odd = Product::new(-1, "", -5, -0.5, 99.0);
        repo.insert(&odd).await.unwrap();

        assert_eq!(repo.get(-1).await.unwrap(), Some(odd));
    }
}

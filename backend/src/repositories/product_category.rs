//! Product category repository for database operations

use anyhow::Result;
use sqlx::PgPool;

/// Product category record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductCategoryRecord {
    pub id: i32,
    pub description: String,
}

/// Product category repository for database operations
pub struct ProductCategoryRepository;

impl ProductCategoryRepository {
    /// Get all product categories.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<ProductCategoryRecord>> {
        let records = sqlx::query_as::<_, ProductCategoryRecord>(
            "SELECT id, description FROM product_categories ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get a product category by id.
    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<ProductCategoryRecord>> {
        let record = sqlx::query_as::<_, ProductCategoryRecord>(
            "SELECT id, description FROM product_categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Create a new product category.
    pub async fn create(pool: &PgPool, description: &str) -> Result<ProductCategoryRecord> {
        let record = sqlx::query_as::<_, ProductCategoryRecord>(
            r#"
            INSERT INTO product_categories (description)
            VALUES ($1)
            RETURNING id, description
            "#,
        )
        .bind(description)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Overwrite a product category row.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        description: &str,
    ) -> Result<Option<ProductCategoryRecord>> {
        let record = sqlx::query_as::<_, ProductCategoryRecord>(
            r#"
            UPDATE product_categories SET description = $2
            WHERE id = $1
            RETURNING id, description
            "#,
        )
        .bind(id)
        .bind(description)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a product category row.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM product_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether the description is used by a different category row.
    ///
    /// For a new category (id 0) any existing row with the description is a
    /// conflict; for an existing category its own row is excluded, so the
    /// check holds exactly when another row shares the description.
    pub async fn description_taken(pool: &PgPool, id: i32, description: &str) -> Result<bool> {
        let taken = if id == 0 {
            sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM product_categories WHERE description = $1)",
            )
            .bind(description)
            .fetch_one(pool)
            .await?
        } else {
            sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM product_categories WHERE description = $1 AND id <> $2)",
            )
            .bind(description)
            .bind(id)
            .fetch_one(pool)
            .await?
        };

        Ok(taken)
    }
}

#[cfg(test)]
mod tests {
    // Database-backed behavior is covered by the integration tests in
    // backend/tests (requires a PostgreSQL instance).
}

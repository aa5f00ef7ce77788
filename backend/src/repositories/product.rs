//! Product repository for database operations
//!
//! Every product belongs to exactly one category; reads join the category
//! so DTOs can carry it inline.

use anyhow::Result;
use sqlx::PgPool;

/// Product record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRecord {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub product_category_id: i32,
}

/// Product row joined with its category description.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductWithCategoryRecord {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub product_category_id: i32,
    pub category_description: String,
}

/// Input for creating or overwriting a product row
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub product_category_id: i32,
}

/// Product repository for database operations
pub struct ProductRepository;

impl ProductRepository {
    /// Get all products with their categories.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<ProductWithCategoryRecord>> {
        let records = sqlx::query_as::<_, ProductWithCategoryRecord>(
            r#"
            SELECT p.id, p.name, p.description, p.product_category_id,
                   pc.description AS category_description
            FROM products p
            JOIN product_categories pc ON pc.id = p.product_category_id
            ORDER BY p.id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get a product with its category.
    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<ProductWithCategoryRecord>> {
        let record = sqlx::query_as::<_, ProductWithCategoryRecord>(
            r#"
            SELECT p.id, p.name, p.description, p.product_category_id,
                   pc.description AS category_description
            FROM products p
            JOIN product_categories pc ON pc.id = p.product_category_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Create a new product.
    pub async fn create(pool: &PgPool, input: ProductInput) -> Result<ProductRecord> {
        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            INSERT INTO products (name, description, product_category_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, product_category_id
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.product_category_id)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Overwrite a product row.
    pub async fn update(pool: &PgPool, id: i32, input: ProductInput) -> Result<Option<ProductRecord>> {
        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            UPDATE products SET name = $2, description = $3, product_category_id = $4
            WHERE id = $1
            RETURNING id, name, description, product_category_id
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.product_category_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a product row.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a product with the given name already exists.
    pub async fn name_taken(pool: &PgPool, name: &str) -> Result<bool> {
        let taken =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE name = $1)")
                .bind(name)
                .fetch_one(pool)
                .await?;

        Ok(taken)
    }
}

#[cfg(test)]
mod tests {
    // Database-backed behavior is covered by the integration tests in
    // backend/tests (requires a PostgreSQL instance).
}

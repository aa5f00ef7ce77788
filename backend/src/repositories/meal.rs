//! Meal repository for database operations
//!
//! Standard CRUD plus the join-row toggles for the diet/meal and
//! meal/product many-to-many associations. Adding an existing pair is an
//! idempotent no-op reported as `false`; removing a missing pair likewise
//! returns `false` instead of failing.

use anyhow::Result;
use sqlx::PgPool;

/// Meal record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealRecord {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Input for creating or overwriting a meal row
#[derive(Debug, Clone)]
pub struct MealInput {
    pub name: String,
    pub description: String,
}

/// Meal repository for database operations
pub struct MealRepository;

impl MealRepository {
    /// Get all meals.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<MealRecord>> {
        let records =
            sqlx::query_as::<_, MealRecord>("SELECT id, name, description FROM meals ORDER BY id")
                .fetch_all(pool)
                .await?;

        Ok(records)
    }

    /// Get a meal by id.
    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<MealRecord>> {
        let record =
            sqlx::query_as::<_, MealRecord>("SELECT id, name, description FROM meals WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(record)
    }

    /// Create a new meal.
    pub async fn create(pool: &PgPool, input: MealInput) -> Result<MealRecord> {
        let record = sqlx::query_as::<_, MealRecord>(
            r#"
            INSERT INTO meals (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Overwrite a meal row.
    pub async fn update(pool: &PgPool, id: i32, input: MealInput) -> Result<Option<MealRecord>> {
        let record = sqlx::query_as::<_, MealRecord>(
            r#"
            UPDATE meals SET name = $2, description = $3
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a meal row.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Associate a meal with a diet. Returns `true` when a new join row was
    /// inserted, `false` when the pair already existed.
    pub async fn add_meal_to_diet(pool: &PgPool, diet_id: i32, meal_id: i32) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM diet_meals WHERE diet_id = $1 AND meal_id = $2)",
        )
        .bind(diet_id)
        .bind(meal_id)
        .fetch_one(pool)
        .await?;

        if exists {
            return Ok(false);
        }

        sqlx::query("INSERT INTO diet_meals (diet_id, meal_id) VALUES ($1, $2)")
            .bind(diet_id)
            .bind(meal_id)
            .execute(pool)
            .await?;

        Ok(true)
    }

    /// Remove the association between a meal and a diet. Returns `false`
    /// when no such association existed.
    pub async fn remove_meal_from_diet(pool: &PgPool, diet_id: i32, meal_id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM diet_meals WHERE diet_id = $1 AND meal_id = $2")
            .bind(diet_id)
            .bind(meal_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Associate a product with a meal. Same contract as `add_meal_to_diet`.
    pub async fn add_product_to_meal(pool: &PgPool, meal_id: i32, product_id: i32) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM meal_products WHERE meal_id = $1 AND product_id = $2)",
        )
        .bind(meal_id)
        .bind(product_id)
        .fetch_one(pool)
        .await?;

        if exists {
            return Ok(false);
        }

        sqlx::query("INSERT INTO meal_products (meal_id, product_id) VALUES ($1, $2)")
            .bind(meal_id)
            .bind(product_id)
            .execute(pool)
            .await?;

        Ok(true)
    }

    /// Remove the association between a product and a meal. Returns `false`
    /// when no such association existed.
    pub async fn remove_product_from_meal(
        pool: &PgPool,
        meal_id: i32,
        product_id: i32,
    ) -> Result<bool> {
        let result = sqlx::query("DELETE FROM meal_products WHERE meal_id = $1 AND product_id = $2")
            .bind(meal_id)
            .bind(product_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a meal with the given name already exists.
    pub async fn name_taken(pool: &PgPool, name: &str) -> Result<bool> {
        let taken =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM meals WHERE name = $1)")
                .bind(name)
                .fetch_one(pool)
                .await?;

        Ok(taken)
    }
}

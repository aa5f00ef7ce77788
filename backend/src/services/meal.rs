//! Meal service
//!
//! Meal CRUD plus the association toggles. Both endpoints of a toggle are
//! checked for existence first, so an absent diet, meal or product surfaces
//! as `NotFound` instead of a foreign-key violation.

use crate::error::ApiError;
use crate::mapper;
use crate::repositories::{DietRepository, MealRepository, ProductRepository};
use mydiet_shared::types::MealDto;
use sqlx::PgPool;

/// Meal service for meal operations
pub struct MealService;

impl MealService {
    /// Get all meals.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<MealDto>, ApiError> {
        let records = MealRepository::get_all(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.iter().map(mapper::meal_to_dto).collect())
    }

    /// Get a meal by id.
    pub async fn get(pool: &PgPool, id: i32) -> Result<MealDto, ApiError> {
        let record = MealRepository::get(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("Meal {} not found", id)))?;

        Ok(mapper::meal_to_dto(&record))
    }

    /// Create a meal.
    pub async fn create(pool: &PgPool, dto: &MealDto) -> Result<MealDto, ApiError> {
        let record = MealRepository::create(pool, mapper::meal_input_from_dto(dto))
            .await
            .map_err(ApiError::Internal)?;

        Ok(mapper::meal_to_dto(&record))
    }

    /// Overwrite a meal row.
    pub async fn update(pool: &PgPool, id: i32, dto: &MealDto) -> Result<MealDto, ApiError> {
        let record = MealRepository::update(pool, id, mapper::meal_input_from_dto(dto))
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("Meal {} not found", id)))?;

        Ok(mapper::meal_to_dto(&record))
    }

    /// Delete a meal.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = MealRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound(format!("Meal {} not found", id)));
        }

        Ok(())
    }

    /// Associate a meal with a diet. `false` when the pair already exists.
    pub async fn add_meal_to_diet(
        pool: &PgPool,
        diet_id: i32,
        meal_id: i32,
    ) -> Result<bool, ApiError> {
        Self::require_meal(pool, meal_id).await?;
        Self::require_diet(pool, diet_id).await?;

        MealRepository::add_meal_to_diet(pool, diet_id, meal_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Remove a meal/diet association. `false` when none existed.
    pub async fn remove_meal_from_diet(
        pool: &PgPool,
        diet_id: i32,
        meal_id: i32,
    ) -> Result<bool, ApiError> {
        Self::require_meal(pool, meal_id).await?;
        Self::require_diet(pool, diet_id).await?;

        MealRepository::remove_meal_from_diet(pool, diet_id, meal_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Associate a product with a meal. `false` when the pair already exists.
    pub async fn add_product_to_meal(
        pool: &PgPool,
        meal_id: i32,
        product_id: i32,
    ) -> Result<bool, ApiError> {
        Self::require_meal(pool, meal_id).await?;
        Self::require_product(pool, product_id).await?;

        MealRepository::add_product_to_meal(pool, meal_id, product_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Remove a meal/product association. `false` when none existed.
    pub async fn remove_product_from_meal(
        pool: &PgPool,
        meal_id: i32,
        product_id: i32,
    ) -> Result<bool, ApiError> {
        Self::require_meal(pool, meal_id).await?;
        Self::require_product(pool, product_id).await?;

        MealRepository::remove_product_from_meal(pool, meal_id, product_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Check whether the DTO's name is free.
    pub async fn check_if_unique(pool: &PgPool, dto: &MealDto) -> Result<bool, ApiError> {
        let taken = MealRepository::name_taken(pool, &dto.name)
            .await
            .map_err(ApiError::Internal)?;

        Ok(!taken)
    }

    async fn require_meal(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        MealRepository::get(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(format!("Meal {} not found", id)))
    }

    async fn require_diet(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        DietRepository::find(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(format!("Diet {} not found", id)))
    }

    async fn require_product(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        ProductRepository::get(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    // Database-backed behavior is covered by the integration tests in
    // backend/tests (requires a PostgreSQL instance).
}

//! Product category service

use crate::error::ApiError;
use crate::mapper;
use crate::repositories::ProductCategoryRepository;
use mydiet_shared::types::ProductCategoryDto;
use sqlx::PgPool;

/// Product category service for category operations
pub struct ProductCategoryService;

impl ProductCategoryService {
    /// Get all product categories.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<ProductCategoryDto>, ApiError> {
        let records = ProductCategoryRepository::get_all(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.iter().map(mapper::category_to_dto).collect())
    }

    /// Get a product category by id.
    pub async fn get(pool: &PgPool, id: i32) -> Result<ProductCategoryDto, ApiError> {
        let record = ProductCategoryRepository::get(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("Product category {} not found", id)))?;

        Ok(mapper::category_to_dto(&record))
    }

    /// Create a product category.
    pub async fn create(pool: &PgPool, dto: &ProductCategoryDto) -> Result<ProductCategoryDto, ApiError> {
        let record = ProductCategoryRepository::create(pool, &dto.description)
            .await
            .map_err(ApiError::Internal)?;

        Ok(mapper::category_to_dto(&record))
    }

    /// Overwrite a product category row.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        dto: &ProductCategoryDto,
    ) -> Result<ProductCategoryDto, ApiError> {
        let record = ProductCategoryRepository::update(pool, id, &dto.description)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("Product category {} not found", id)))?;

        Ok(mapper::category_to_dto(&record))
    }

    /// Delete a product category.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = ProductCategoryRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound(format!(
                "Product category {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Check whether the DTO's description is free for the DTO's own row.
    pub async fn check_if_unique(
        pool: &PgPool,
        dto: &ProductCategoryDto,
    ) -> Result<bool, ApiError> {
        let taken = ProductCategoryRepository::description_taken(pool, dto.id, &dto.description)
            .await
            .map_err(ApiError::Internal)?;

        Ok(!taken)
    }
}

#[cfg(test)]
mod tests {
    // Database-backed behavior is covered by the integration tests in
    // backend/tests (requires a PostgreSQL instance).
}

//! Product service
//!
//! Delegates to `ProductRepository`; reads carry the category inline, and
//! writes require the DTO to name one.

use crate::error::ApiError;
use crate::mapper;
use crate::repositories::ProductRepository;
use mydiet_shared::types::ProductDto;
use sqlx::PgPool;

/// Product service for product operations
pub struct ProductService;

impl ProductService {
    /// Get all products with their categories.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<ProductDto>, ApiError> {
        let records = ProductRepository::get_all(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.iter().map(mapper::product_to_dto).collect())
    }

    /// Get a product with its category.
    pub async fn get(pool: &PgPool, id: i32) -> Result<ProductDto, ApiError> {
        let record = ProductRepository::get(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", id)))?;

        Ok(mapper::product_to_dto(&record))
    }

    /// Create a product in the category the DTO names.
    pub async fn create(pool: &PgPool, dto: &ProductDto) -> Result<ProductDto, ApiError> {
        let input = mapper::product_input_from_dto(dto)
            .ok_or_else(|| ApiError::Validation("Product category is required".to_string()))?;

        let record = ProductRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        let mut created = mapper::product_record_to_dto(&record);
        created.product_category = dto.product_category.clone();

        Ok(created)
    }

    /// Overwrite a product row.
    pub async fn update(pool: &PgPool, id: i32, dto: &ProductDto) -> Result<ProductDto, ApiError> {
        let input = mapper::product_input_from_dto(dto)
            .ok_or_else(|| ApiError::Validation("Product category is required".to_string()))?;

        let record = ProductRepository::update(pool, id, input)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", id)))?;

        let mut updated = mapper::product_record_to_dto(&record);
        updated.product_category = dto.product_category.clone();

        Ok(updated)
    }

    /// Delete a product.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = ProductRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound(format!("Product {} not found", id)));
        }

        Ok(())
    }

    /// Check whether the DTO's name is free.
    pub async fn check_if_unique(pool: &PgPool, dto: &ProductDto) -> Result<bool, ApiError> {
        let taken = ProductRepository::name_taken(pool, &dto.name)
            .await
            .map_err(ApiError::Internal)?;

        Ok(!taken)
    }
}

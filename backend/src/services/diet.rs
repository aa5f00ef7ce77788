//! Diet service
//!
//! Delegates to `DietRepository`. Reads attach the owning patient; the
//! `/meals` read returns the full association graph.

use crate::error::ApiError;
use crate::mapper;
use crate::repositories::DietRepository;
use mydiet_shared::types::DietDto;
use sqlx::PgPool;

/// Diet service for diet operations
pub struct DietService;

impl DietService {
    /// Get all diets, each with its owning patient.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<DietDto>, ApiError> {
        let records = DietRepository::get_all(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.iter().map(mapper::diet_to_dto).collect())
    }

    /// Get a diet with its meals and owning patient.
    pub async fn get(pool: &PgPool, id: i32) -> Result<DietDto, ApiError> {
        let (record, meals) = DietRepository::get(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("Diet {} not found", id)))?;

        let mut dto = mapper::diet_to_dto(&record);
        dto.meals = meals.iter().map(mapper::meal_to_dto).collect();

        Ok(dto)
    }

    /// Create a diet and associate the carried patient, if any.
    pub async fn create(pool: &PgPool, dto: &DietDto) -> Result<DietDto, ApiError> {
        let record = DietRepository::create(pool, dto)
            .await
            .map_err(ApiError::Internal)?;

        let mut created = mapper::diet_record_to_dto(&record);
        created.patient = dto.patient.clone();

        Ok(created)
    }

    /// Overwrite a diet and re-associate the carried patient.
    pub async fn update(pool: &PgPool, id: i32, dto: &DietDto) -> Result<DietDto, ApiError> {
        let record = DietRepository::update(pool, id, dto)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("Diet {} not found", id)))?;

        let mut updated = mapper::diet_record_to_dto(&record);
        updated.patient = dto.patient.clone();

        Ok(updated)
    }

    /// Delete a diet.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = DietRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound(format!("Diet {} not found", id)));
        }

        Ok(())
    }

    /// Get the full association graph of a diet: meals and their products.
    pub async fn get_all_diet_meals(pool: &PgPool, id: i32) -> Result<DietDto, ApiError> {
        let graph = DietRepository::get_all_diet_meals(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("Diet {} not found", id)))?;

        Ok(mapper::diet_graph_to_dto(&graph))
    }

    /// Check whether the DTO's name is free.
    pub async fn check_if_unique(pool: &PgPool, dto: &DietDto) -> Result<bool, ApiError> {
        let taken = DietRepository::name_taken(pool, &dto.name)
            .await
            .map_err(ApiError::Internal)?;

        Ok(!taken)
    }
}

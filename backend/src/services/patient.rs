//! Patient service
//!
//! Delegates to `PatientRepository` and maps records to DTOs. The latest
//! weight is attached only on single-patient reads; list reads leave it 0.

use crate::error::ApiError;
use crate::mapper;
use crate::repositories::{PatientField, PatientRepository};
use mydiet_shared::types::PatientDto;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Patient service for patient operations
pub struct PatientService;

impl PatientService {
    /// Get all patients.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<PatientDto>, ApiError> {
        let records = PatientRepository::get_all(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.iter().map(mapper::patient_to_dto).collect())
    }

    /// Get a patient with its latest weight.
    pub async fn get(pool: &PgPool, id: i32) -> Result<PatientDto, ApiError> {
        let (record, weight) = PatientRepository::get(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("Patient {} not found", id)))?;

        Ok(mapper::patient_to_dto_with_weight(&record, weight))
    }

    /// Create a patient and the first row of its weight history.
    pub async fn create(pool: &PgPool, dto: &PatientDto) -> Result<PatientDto, ApiError> {
        let input = mapper::patient_input_from_dto(dto);
        let weight = Decimal::from_f64(dto.weight).unwrap_or(Decimal::ZERO);

        let record = PatientRepository::create(pool, input, weight)
            .await
            .map_err(ApiError::Internal)?;

        Ok(mapper::patient_to_dto_with_weight(&record, weight))
    }

    /// Overwrite a patient row. Weight history is untouched.
    pub async fn update(pool: &PgPool, id: i32, dto: &PatientDto) -> Result<PatientDto, ApiError> {
        let input = mapper::patient_input_from_dto(dto);

        let record = PatientRepository::update(pool, id, input)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("Patient {} not found", id)))?;

        Ok(mapper::patient_to_dto(&record))
    }

    /// Delete a patient.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = PatientRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound(format!("Patient {} not found", id)));
        }

        Ok(())
    }

    /// Check whether the given field of the DTO is already in use.
    pub async fn check_if_unique(
        pool: &PgPool,
        field: PatientField,
        dto: &PatientDto,
    ) -> Result<bool, ApiError> {
        let input = mapper::patient_input_from_dto(dto);
        let taken = PatientRepository::field_taken(pool, field, &input)
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

//! Diet repository for database operations
//!
//! Diets own the diet/meal association rows and a zero-or-one patient
//! (the inverse of `patients.diet_id`). The patient link is persisted
//! through the patient repository; diet create/update are multi-step
//! sequences in which every store write commits on its own.

use anyhow::Result;
use mydiet_shared::types::DietDto;
use sqlx::PgPool;

use crate::mapper;
use crate::repositories::meal::MealRecord;
use crate::repositories::patient::{PatientRecord, PatientRepository};
use crate::repositories::product::ProductRecord;

/// Diet record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DietRecord {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// A diet with its owning patient attached.
#[derive(Debug, Clone)]
pub struct DietWithPatient {
    pub diet: DietRecord,
    pub patient: Option<PatientRecord>,
}

/// A diet with its full association graph: meals, and the products of
/// every meal.
#[derive(Debug, Clone)]
pub struct DietGraph {
    pub diet: DietRecord,
    pub patient: Option<PatientRecord>,
    pub meals: Vec<(MealRecord, Vec<ProductRecord>)>,
}

/// Diet repository for database operations
pub struct DietRepository;

impl DietRepository {
    /// Get all diets, each with its owning patient.
    ///
    /// One patient query per diet, matching the read path the API has
    /// always exposed.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<DietWithPatient>> {
        let diets = sqlx::query_as::<_, DietRecord>(
            "SELECT id, name, description FROM diets ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        let mut result = Vec::with_capacity(diets.len());
        for diet in diets {
            let patient = PatientRepository::find_by_diet(pool, diet.id).await?;
            result.push(DietWithPatient { diet, patient });
        }

        Ok(result)
    }

    /// Get a diet with its meal associations and owning patient.
    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<(DietWithPatient, Vec<MealRecord>)>> {
        let Some(diet) = Self::find(pool, id).await? else {
            return Ok(None);
        };

        let meals = Self::meals_of_diet(pool, id).await?;
        let patient = PatientRepository::find_by_diet(pool, id).await?;

        Ok(Some((DietWithPatient { diet, patient }, meals)))
    }

    /// Find a diet row by id.
    pub async fn find(pool: &PgPool, id: i32) -> Result<Option<DietRecord>> {
        let record = sqlx::query_as::<_, DietRecord>(
            "SELECT id, name, description FROM diets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Create a diet, then persist the association to the carried patient
    /// by writing its `diet_id` through the patient update path.
    ///
    /// Two independently-committed writes: if the patient update fails the
    /// diet exists without its patient link.
    pub async fn create(pool: &PgPool, dto: &DietDto) -> Result<DietRecord> {
        let record = sqlx::query_as::<_, DietRecord>(
            r#"
            INSERT INTO diets (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .fetch_one(pool)
        .await?;

        if let Some(patient) = &dto.patient {
            let mut input = mapper::patient_input_from_dto(patient);
            input.diet_id = Some(record.id);
            PatientRepository::update(pool, patient.id, input).await?;
        }

        Ok(record)
    }

    /// Overwrite a diet row, clear the previous patient association, then
    /// re-associate the carried patient.
    ///
    /// Three sequential commits; disassociating before reassociating keeps
    /// at most one patient pointing at the diet.
    pub async fn update(pool: &PgPool, id: i32, dto: &DietDto) -> Result<Option<DietRecord>> {
        let record = sqlx::query_as::<_, DietRecord>(
            r#"
            UPDATE diets SET name = $2, description = $3
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.description)
        .fetch_optional(pool)
        .await?;

        let Some(record) = record else {
            return Ok(None);
        };

        PatientRepository::disassociate_diet(pool, id).await?;

        if let Some(patient) = &dto.patient {
            let mut input = mapper::patient_input_from_dto(patient);
            input.diet_id = Some(record.id);
            PatientRepository::update(pool, patient.id, input).await?;
        }

        Ok(Some(record))
    }

    /// Delete a diet row only. Join rows cascade; the owning patient's
    /// `diet_id` is nulled by the schema.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM diets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Load the full association graph of a diet: its meals, and for each
    /// meal its products.
    pub async fn get_all_diet_meals(pool: &PgPool, id: i32) -> Result<Option<DietGraph>> {
        let Some(diet) = Self::find(pool, id).await? else {
            return Ok(None);
        };

        let patient = PatientRepository::find_by_diet(pool, id).await?;

        let meal_records = Self::meals_of_diet(pool, id).await?;
        let mut meals = Vec::with_capacity(meal_records.len());
        for meal in meal_records {
            let products = sqlx::query_as::<_, ProductRecord>(
                r#"
                SELECT p.id, p.name, p.description, p.product_category_id
                FROM products p
                JOIN meal_products mp ON mp.product_id = p.id
                WHERE mp.meal_id = $1
                ORDER BY p.id
                "#,
            )
            .bind(meal.id)
            .fetch_all(pool)
            .await?;
            meals.push((meal, products));
        }

        Ok(Some(DietGraph {
            diet,
            patient,
            meals,
        }))
    }

    /// Check whether a diet with the given name already exists.
    pub async fn name_taken(pool: &PgPool, name: &str) -> Result<bool> {
        let taken =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM diets WHERE name = $1)")
                .bind(name)
                .fetch_one(pool)
                .await?;

        Ok(taken)
    }

    async fn meals_of_diet(pool: &PgPool, diet_id: i32) -> Result<Vec<MealRecord>> {
        let records = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT m.id, m.name, m.description
            FROM meals m
            JOIN diet_meals dm ON dm.meal_id = m.id
            WHERE dm.diet_id = $1
            ORDER BY m.id
            "#,
        )
        .bind(diet_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

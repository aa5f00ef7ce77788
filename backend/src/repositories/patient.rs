//! Patient repository for database operations
//!
//! Besides plain CRUD the patient table owns two pieces of association
//! state: the nullable `diet_id` pointing at the patient's current diet,
//! and the append-only weight history whose latest value is surfaced as a
//! transient field on the patient.

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Patient record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PatientRecord {
    pub id: i32,
    pub fiscal_code: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub age: i32,
    pub gender: String,
    pub phone: String,
    pub diet_id: Option<i32>,
}

/// Weight history record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WeightRecord {
    pub id: i32,
    pub weight_value: Decimal,
    pub date: DateTime<Utc>,
    pub patient_id: i32,
}

/// Input for creating or overwriting a patient row
#[derive(Debug, Clone)]
pub struct PatientInput {
    pub fiscal_code: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub age: i32,
    pub gender: String,
    pub phone: String,
    pub diet_id: Option<i32>,
}

/// Uniqueness-checkable patient fields.
///
/// An enumerated tag instead of a string-keyed dispatch: a typo'd field
/// name fails to compile rather than silently reporting "not taken".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientField {
    FiscalCode,
    Name,
    Surname,
    Phone,
    Email,
}

/// Patient repository for database operations
pub struct PatientRepository;

impl PatientRepository {
    /// Get all patients, associations unmapped.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<PatientRecord>> {
        let records = sqlx::query_as::<_, PatientRecord>(
            r#"
            SELECT id, fiscal_code, name, surname, email, age, gender, phone, diet_id
            FROM patients
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get a patient together with the latest value of its weight history.
    ///
    /// A patient created outside the normal flow may have no weight rows;
    /// that case surfaces as weight 0 rather than an error.
    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<(PatientRecord, Decimal)>> {
        let patient = Self::find(pool, id).await?;

        let Some(patient) = patient else {
            return Ok(None);
        };

        let weight = Self::latest_weight(pool, patient.id)
            .await?
            .map(|w| w.weight_value)
            .unwrap_or(Decimal::ZERO);

        Ok(Some((patient, weight)))
    }

    /// Find a patient row by id.
    pub async fn find(pool: &PgPool, id: i32) -> Result<Option<PatientRecord>> {
        let record = sqlx::query_as::<_, PatientRecord>(
            r#"
            SELECT id, fiscal_code, name, surname, email, age, gender, phone, diet_id
            FROM patients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Find the patient currently associated with a diet.
    pub async fn find_by_diet(pool: &PgPool, diet_id: i32) -> Result<Option<PatientRecord>> {
        let record = sqlx::query_as::<_, PatientRecord>(
            r#"
            SELECT id, fiscal_code, name, surname, email, age, gender, phone, diet_id
            FROM patients
            WHERE diet_id = $1
            "#,
        )
        .bind(diet_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Create a patient, then append the first row of its weight history
    /// stamped with the current time.
    ///
    /// The two inserts commit independently; a failure between them leaves
    /// a patient without a weight row (see `get` for the guard).
    pub async fn create(pool: &PgPool, input: PatientInput, weight: Decimal) -> Result<PatientRecord> {
        let record = sqlx::query_as::<_, PatientRecord>(
            r#"
            INSERT INTO patients (fiscal_code, name, surname, email, age, gender, phone, diet_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, fiscal_code, name, surname, email, age, gender, phone, diet_id
            "#,
        )
        .bind(&input.fiscal_code)
        .bind(&input.name)
        .bind(&input.surname)
        .bind(&input.email)
        .bind(input.age)
        .bind(&input.gender)
        .bind(&input.phone)
        .bind(input.diet_id)
        .fetch_one(pool)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO weights (weight_value, date, patient_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(weight)
        .bind(Utc::now())
        .bind(record.id)
        .execute(pool)
        .await?;

        Ok(record)
    }

    /// Overwrite every mutable column of a patient row from the input.
    ///
    /// Weight history is write-once at creation; updates never append a
    /// new weight row.
    pub async fn update(pool: &PgPool, id: i32, input: PatientInput) -> Result<Option<PatientRecord>> {
        let record = sqlx::query_as::<_, PatientRecord>(
            r#"
            UPDATE patients SET
                fiscal_code = $2,
                name = $3,
                surname = $4,
                email = $5,
                age = $6,
                gender = $7,
                phone = $8,
                diet_id = $9
            WHERE id = $1
            RETURNING id, fiscal_code, name, surname, email, age, gender, phone, diet_id
            "#,
        )
        .bind(id)
        .bind(&input.fiscal_code)
        .bind(&input.name)
        .bind(&input.surname)
        .bind(&input.email)
        .bind(input.age)
        .bind(&input.gender)
        .bind(&input.phone)
        .bind(input.diet_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a patient row. Weight rows go with it via the schema cascade.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Clear the diet association of whichever patient points at `diet_id`.
    /// Returns whether a patient was found and disassociated.
    pub async fn disassociate_diet(pool: &PgPool, diet_id: i32) -> Result<bool> {
        let result = sqlx::query("UPDATE patients SET diet_id = NULL WHERE diet_id = $1")
            .bind(diet_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether another patient row already uses the given field value.
    /// Duplicates the unique indexes so callers can report conflicts before
    /// hitting a constraint violation.
    pub async fn field_taken(
        pool: &PgPool,
        field: PatientField,
        input: &PatientInput,
    ) -> Result<bool> {
        let (query, value) = match field {
            PatientField::FiscalCode => (
                "SELECT EXISTS(SELECT 1 FROM patients WHERE fiscal_code = $1)",
                &input.fiscal_code,
            ),
            PatientField::Name => (
                "SELECT EXISTS(SELECT 1 FROM patients WHERE name = $1)",
                &input.name,
            ),
            PatientField::Surname => (
                "SELECT EXISTS(SELECT 1 FROM patients WHERE surname = $1)",
                &input.surname,
            ),
            PatientField::Phone => (
                "SELECT EXISTS(SELECT 1 FROM patients WHERE phone = $1)",
                &input.phone,
            ),
            PatientField::Email => (
                "SELECT EXISTS(SELECT 1 FROM patients WHERE email = $1)",
                &input.email,
            ),
        };

        let taken = sqlx::query_scalar::<_, bool>(query)
            .bind(value)
            .fetch_one(pool)
            .await?;

        Ok(taken)
    }

    /// Latest weight history row of a patient, if any.
    pub async fn latest_weight(pool: &PgPool, patient_id: i32) -> Result<Option<WeightRecord>> {
        let record = sqlx::query_as::<_, WeightRecord>(
            r#"
            SELECT id, weight_value, date, patient_id
            FROM weights
            WHERE patient_id = $1
            ORDER BY date DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(patient_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Full weight history of a patient, newest first.
    pub async fn weight_history(pool: &PgPool, patient_id: i32) -> Result<Vec<WeightRecord>> {
        let records = sqlx::query_as::<_, WeightRecord>(
            r#"
            SELECT id, weight_value, date, patient_id
            FROM weights
            WHERE patient_id = $1
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(patient_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

//! Patient routes
//!
//! CRUD over `/api/v1/patients`. All handlers require a Bearer token.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::PatientService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use mydiet_shared::types::PatientDto;
use validator::Validate;

/// Create patient routes
pub fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/:id", get(get_one).put(update).delete(delete_one))
}

/// GET /api/v1/patients
async fn get_all(State(state): State<AppState>, _user: AuthUser) -> ApiResult<Json<Vec<PatientDto>>> {
    let patients = PatientService::get_all(&state.db).await?;
    Ok(Json(patients))
}

/// GET /api/v1/patients/{id}
async fn get_one(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<PatientDto>> {
    let patient = PatientService::get(&state.db, id).await?;
    Ok(Json(patient))
}

/// POST /api/v1/patients
async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(dto): Json<PatientDto>,
) -> ApiResult<(StatusCode, Json<PatientDto>)> {
    dto.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let patient = PatientService::create(&state.db, &dto).await?;
    Ok((StatusCode::CREATED, Json(patient)))
}

/// PUT /api/v1/patients/{id}
async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(dto): Json<PatientDto>,
) -> ApiResult<Json<PatientDto>> {
    dto.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let patient = PatientService::update(&state.db, id, &dto).await?;
    Ok(Json(patient))
}

/// DELETE /api/v1/patients/{id}
async fn delete_one(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    PatientService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

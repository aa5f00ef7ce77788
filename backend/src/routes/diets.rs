//! Diet routes
//!
//! CRUD over `/api/v1/diets`, plus `GET /{id}/meals` returning the full
//! diet → meals → products graph.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::DietService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use mydiet_shared::types::DietDto;
use validator::Validate;

/// Create diet routes
pub fn diet_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/:id", get(get_one).put(update).delete(delete_one))
        .route("/:id/meals", get(get_diet_meals))
}

/// GET /api/v1/diets
async fn get_all(State(state): State<AppState>, _user: AuthUser) -> ApiResult<Json<Vec<DietDto>>> {
    let diets = DietService::get_all(&state.db).await?;
    Ok(Json(diets))
}

/// GET /api/v1/diets/{id}
async fn get_one(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<DietDto>> {
    let diet = DietService::get(&state.db, id).await?;
    Ok(Json(diet))
}

/// GET /api/v1/diets/{id}/meals
async fn get_diet_meals(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<DietDto>> {
    let diet = DietService::get_all_diet_meals(&state.db, id).await?;
    Ok(Json(diet))
}

/// POST /api/v1/diets
async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(dto): Json<DietDto>,
) -> ApiResult<(StatusCode, Json<DietDto>)> {
    dto.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let diet = DietService::create(&state.db, &dto).await?;
    Ok((StatusCode::CREATED, Json(diet)))
}

/// PUT /api/v1/diets/{id}
async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(dto): Json<DietDto>,
) -> ApiResult<Json<DietDto>> {
    dto.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let diet = DietService::update(&state.db, id, &dto).await?;
    Ok(Json(diet))
}

/// DELETE /api/v1/diets/{id}
async fn delete_one(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    DietService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

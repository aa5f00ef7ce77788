//! Meal routes
//!
//! CRUD over `/api/v1/meals`, plus the association toggles for diets and
//! products. A toggle that changes nothing (pair already present, or
//! absent on removal) answers 400.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::MealService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use mydiet_shared::types::MealDto;
use validator::Validate;

/// Create meal routes
pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/:id", get(get_one).put(update).delete(delete_one))
        .route(
            "/:meal_id/diets/:diet_id",
            post(add_meal_to_diet).delete(remove_meal_from_diet),
        )
        .route(
            "/:meal_id/products/:product_id",
            post(add_product_to_meal).delete(remove_product_from_meal),
        )
}

/// GET /api/v1/meals
async fn get_all(State(state): State<AppState>, _user: AuthUser) -> ApiResult<Json<Vec<MealDto>>> {
    let meals = MealService::get_all(&state.db).await?;
    Ok(Json(meals))
}

/// GET /api/v1/meals/{id}
async fn get_one(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<MealDto>> {
    let meal = MealService::get(&state.db, id).await?;
    Ok(Json(meal))
}

/// POST /api/v1/meals
async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(dto): Json<MealDto>,
) -> ApiResult<(StatusCode, Json<MealDto>)> {
    dto.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let meal = MealService::create(&state.db, &dto).await?;
    Ok((StatusCode::CREATED, Json(meal)))
}

/// PUT /api/v1/meals/{id}
async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(dto): Json<MealDto>,
) -> ApiResult<Json<MealDto>> {
    dto.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let meal = MealService::update(&state.db, id, &dto).await?;
    Ok(Json(meal))
}

/// DELETE /api/v1/meals/{id}
async fn delete_one(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    MealService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/meals/{meal_id}/diets/{diet_id}
async fn add_meal_to_diet(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((meal_id, diet_id)): Path<(i32, i32)>,
) -> ApiResult<StatusCode> {
    let added = MealService::add_meal_to_diet(&state.db, diet_id, meal_id).await?;

    if added {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::BadRequest(
            "Meal is already associated with the diet".to_string(),
        ))
    }
}

/// DELETE /api/v1/meals/{meal_id}/diets/{diet_id}
async fn remove_meal_from_diet(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((meal_id, diet_id)): Path<(i32, i32)>,
) -> ApiResult<StatusCode> {
    let removed = MealService::remove_meal_from_diet(&state.db, diet_id, meal_id).await?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::BadRequest(
            "Meal is not associated with the diet".to_string(),
        ))
    }
}

/// POST /api/v1/meals/{meal_id}/products/{product_id}
async fn add_product_to_meal(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((meal_id, product_id)): Path<(i32, i32)>,
) -> ApiResult<StatusCode> {
    let added = MealService::add_product_to_meal(&state.db, meal_id, product_id).await?;

    if added {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::BadRequest(
            "Product is already associated with the meal".to_string(),
        ))
    }
}

/// DELETE /api/v1/meals/{meal_id}/products/{product_id}
async fn remove_product_from_meal(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((meal_id, product_id)): Path<(i32, i32)>,
) -> ApiResult<StatusCode> {
    let removed = MealService::remove_product_from_meal(&state.db, meal_id, product_id).await?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::BadRequest(
            "Product is not associated with the meal".to_string(),
        ))
    }
}

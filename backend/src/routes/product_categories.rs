//! Product category routes
//!
//! CRUD over `/api/v1/product-categories`.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::ProductCategoryService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use mydiet_shared::types::ProductCategoryDto;
use validator::Validate;

/// Create product category routes
pub fn product_category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/:id", get(get_one).put(update).delete(delete_one))
}

/// GET /api/v1/product-categories
async fn get_all(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<Vec<ProductCategoryDto>>> {
    let categories = ProductCategoryService::get_all(&state.db).await?;
    Ok(Json(categories))
}

/// GET /api/v1/product-categories/{id}
async fn get_one(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProductCategoryDto>> {
    let category = ProductCategoryService::get(&state.db, id).await?;
    Ok(Json(category))
}

/// POST /api/v1/product-categories
async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(dto): Json<ProductCategoryDto>,
) -> ApiResult<(StatusCode, Json<ProductCategoryDto>)> {
    dto.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let category = ProductCategoryService::create(&state.db, &dto).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/v1/product-categories/{id}
async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(dto): Json<ProductCategoryDto>,
) -> ApiResult<Json<ProductCategoryDto>> {
    dto.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let category = ProductCategoryService::update(&state.db, id, &dto).await?;
    Ok(Json(category))
}

/// DELETE /api/v1/product-categories/{id}
async fn delete_one(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    ProductCategoryService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

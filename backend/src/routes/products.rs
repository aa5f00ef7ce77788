//! Product routes
//!
//! CRUD over `/api/v1/products`. Reads carry the category inline.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::ProductService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use mydiet_shared::types::ProductDto;
use validator::Validate;

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/:id", get(get_one).put(update).delete(delete_one))
}

/// GET /api/v1/products
async fn get_all(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<Vec<ProductDto>>> {
    let products = ProductService::get_all(&state.db).await?;
    Ok(Json(products))
}

/// GET /api/v1/products/{id}
async fn get_one(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProductDto>> {
    let product = ProductService::get(&state.db, id).await?;
    Ok(Json(product))
}

/// POST /api/v1/products
async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(dto): Json<ProductDto>,
) -> ApiResult<(StatusCode, Json<ProductDto>)> {
    dto.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let product = ProductService::create(&state.db, &dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/v1/products/{id}
async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(dto): Json<ProductDto>,
) -> ApiResult<Json<ProductDto>> {
    dto.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let product = ProductService::update(&state.db, id, &dto).await?;
    Ok(Json(product))
}

/// DELETE /api/v1/products/{id}
async fn delete_one(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    ProductService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

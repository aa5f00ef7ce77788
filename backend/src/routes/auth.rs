//! Authentication routes
//!
//! Registration takes a JSON body; login reads `Basic` credentials from
//! the Authorization header. Both answer with the `AuthResponse` envelope,
//! 200 on success and 400 on any expected failure.

use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use mydiet_shared::types::{AuthResponse, RegisterDto};
use validator::Validate;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
///
/// POST /api/v1/auth/register
async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterDto>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    if dto.validate().is_err() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("Register properties not valid")),
        ));
    }

    let response = AuthService::register(&state.db, state.jwt(), &dto).await?;
    Ok(envelope_status(response))
}

/// Login with Basic credentials in the Authorization header
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let Some(header_value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("No Authorization Header found")),
        ));
    };

    let Some(credentials) = AuthService::decode_basic_credentials(header_value) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("Error while decoding auth")),
        ));
    };

    let response = AuthService::login(&state.db, state.jwt(), &credentials).await?;
    Ok(envelope_status(response))
}

fn envelope_status(response: AuthResponse) -> (StatusCode, Json<AuthResponse>) {
    let status = if response.is_success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_maps_to_ok() {
        let (status, _) = envelope_status(AuthResponse::success(
            "token".to_string(),
            chrono::Utc::now(),
        ));
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn failure_envelope_maps_to_bad_request() {
        let (status, _) = envelope_status(AuthResponse::failure("Invalid Password"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

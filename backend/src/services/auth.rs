//! Authentication service
//!
//! Register/login return the token envelope rather than erroring: every
//! expected failure (password mismatch, unknown email, wrong password,
//! duplicate email) is a `failure` envelope with `isSuccess: false`, and
//! `ApiError` is reserved for unexpected store or hashing failures.

use crate::auth::{PasswordService, TokenService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mydiet_shared::types::{AuthResponse, LoginDto, RegisterDto};
use mydiet_shared::validation::{validate_credential_len, validate_email};
use sqlx::PgPool;
use tracing::{info, warn};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user and return a signed token on success.
    pub async fn register(
        pool: &PgPool,
        tokens: &TokenService,
        dto: &RegisterDto,
    ) -> Result<AuthResponse, ApiError> {
        if let Err(message) = validate_email(&dto.email) {
            return Ok(AuthResponse::failure(message));
        }
        if let Err(message) = validate_credential_len(&dto.password) {
            return Ok(AuthResponse::failure(message));
        }

        if dto.password != dto.confirm_password {
            return Ok(AuthResponse::failure(
                "Confirm password doesn't match the password",
            ));
        }

        if UserRepository::email_exists(pool, &dto.email)
            .await
            .map_err(ApiError::Internal)?
        {
            warn!(email = %dto.email, "Registration rejected: email already taken");
            let mut response = AuthResponse::failure("Error during the registration of the user");
            response.errors = Some(vec![format!("Email '{}' is already taken", dto.email)]);
            return Ok(response);
        }

        let password_hash = PasswordService::hash_async(dto.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, &dto.email, &password_hash)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %user.id, "User registered");

        let (token, expire_date) = tokens
            .generate_token(user.id, &user.email)
            .map_err(ApiError::Internal)?;

        Ok(AuthResponse::success(token, expire_date))
    }

    /// Log a user in and return a signed token on success.
    pub async fn login(
        pool: &PgPool,
        tokens: &TokenService,
        dto: &LoginDto,
    ) -> Result<AuthResponse, ApiError> {
        let user = UserRepository::find_by_email(pool, &dto.email)
            .await
            .map_err(ApiError::Internal)?;

        let Some(user) = user else {
            return Ok(AuthResponse::failure(
                "No user found with the specified email address",
            ));
        };

        let valid = PasswordService::verify_async(dto.password.clone(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Ok(AuthResponse::failure("Invalid Password"));
        }

        let (token, expire_date) = tokens
            .generate_token(user.id, &user.email)
            .map_err(ApiError::Internal)?;

        Ok(AuthResponse::success(token, expire_date))
    }

    /// Decode a `Basic base64(email:password)` Authorization header value
    /// into login credentials. `None` for anything malformed.
    pub fn decode_basic_credentials(header_value: &str) -> Option<LoginDto> {
        let encoded = header_value.strip_prefix("Basic ")?.trim();

        let bytes = STANDARD.decode(encoded).ok()?;
        let decoded = String::from_utf8(bytes).ok()?;

        let (email, password) = decoded.split_once(':')?;

        Some(LoginDto::new(email.trim(), password.trim()))
    }
}

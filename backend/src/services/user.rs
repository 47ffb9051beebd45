//! User service for registration, login and token refresh
//!
//! Password hashing runs on the blocking pool; JWT keys come pre-computed
//! from AppState.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use prakriti_shared::types::{AuthTokens, RegisterRequest, UserProfile};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Normalized form used for storage and lookup
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn issue_tokens(jwt_service: &JwtService, user_id: Uuid) -> Result<AuthTokens, ApiError> {
    let access_token = jwt_service
        .generate_access_token(user_id)
        .map_err(ApiError::Internal)?;
    let refresh_token = jwt_service
        .generate_refresh_token(user_id)
        .map_err(ApiError::Internal)?;

    Ok(AuthTokens {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: jwt_service.access_token_expiry_secs(),
    })
}

pub struct UserService;

impl UserService {
    /// Register a new user and return a token pair
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        request: RegisterRequest,
    ) -> Result<AuthTokens, ApiError> {
        let request = RegisterRequest {
            email: normalize_email(&request.email),
            password: request.password,
        };
        request.validate()?;

        if UserRepository::email_exists(pool, &request.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        let password_hash = PasswordService::hash_async(request.password)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, &request.email, &password_hash)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %user.id, "Registered user");
        issue_tokens(jwt_service, user.id)
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthTokens, ApiError> {
        let user = UserRepository::find_by_email(pool, &normalize_email(email))
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        issue_tokens(jwt_service, user.id)
    }

    /// Exchange a refresh token for a new token pair
    pub async fn refresh_token(
        pool: &PgPool,
        jwt_service: &JwtService,
        refresh_token: &str,
    ) -> Result<AuthTokens, ApiError> {
        let claims = jwt_service
            .validate_refresh_token(refresh_token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid refresh token: {}", e)))?;

        let user_id = claims
            .user_id()
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

        UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

        issue_tokens(jwt_service, user_id)
    }

    pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<UserProfile, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(UserProfile {
            id: user.id.to_string(),
            email: user.email,
            created_at: user.created_at,
        })
    }
}

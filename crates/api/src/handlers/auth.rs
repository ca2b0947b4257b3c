//! Handlers for registration and login.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use taskboard_core::error::CoreError;
use taskboard_core::validation::{validate_email, validate_password, validate_username};
use taskboard_db::models::user::{CreateUser, UserResponse};
use taskboard_db::repositories::UserRepo;

use crate::auth::jwt::issue_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Returned by both register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Create an account and issue its permanent bearer token. A username or
/// email that is already taken is rejected with 401.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    validate_username(&input.username)?;
    validate_password(&input.password)?;
    let email = input
        .email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());
    if let Some(email) = &email {
        validate_email(email)?;
    }

    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(already_exists());
    }
    if let Some(email) = &email {
        if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
            return Err(already_exists());
        }
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let token = issue_token(&input.username, &state.config.token)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let create = CreateUser {
        username: input.username,
        email,
        password_hash,
        token,
    };

    // A concurrent registration can still win the race past the checks above.
    let user = match UserRepo::create(&state.pool, &create).await {
        Ok(user) => user,
        Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
            return Err(already_exists());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok(Json(AuthResponse {
        user: UserResponse::from(&user),
        token: user.token,
    }))
}

/// POST /login
///
/// Exchange username + password for the user's stored token.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(invalid_credentials());
    }

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        user: UserResponse::from(&user),
        token: user.token,
    }))
}

fn already_exists() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "A user with this username or email already exists".into(),
    ))
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

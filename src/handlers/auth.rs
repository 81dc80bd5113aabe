// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{CreateUserRequest, LoginRequest, User},
    utils::{
        hash::{hash_password, verify_password},
        jwt::sign_jwt,
    },
};

/// Registers a new user.
///
/// Hashes the password using Argon2 before storing it.
/// Returns 201 Created and the user object (excluding the password hash).
/// Username uniqueness is enforced by the store's UNIQUE constraint.
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        return Err(AppError::BadRequest("username and password are required".to_string()));
    };

    let hashed_password = hash_password(&password)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, name, password_hash, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, username, name, password_hash, created_at
        "#,
    )
    .bind(&username)
    .bind(&payload.name)
    .bind(&hashed_password)
    .bind(chrono::Utc::now())
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        if matches!(&e, sqlx::Error::Database(db_err) if db_err.is_unique_violation()) {
            return AppError::Conflict("expected `username` to be unique".to_string());
        }
        tracing::error!("Failed to register user: {:?}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Authenticates a user and returns a JWT token.
///
/// Verifies the username and password against the database.
/// If valid, signs a JWT token carrying the user's ID and username.
pub async fn login(
    State(pool): State<SqlitePool>,
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, name, password_hash, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(&payload.username)
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Login DB error: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    let user = user.ok_or(AppError::AuthError("invalid username or password".to_string()))?;

    let is_valid = verify_password(&payload.password, &user.password_hash)?;

    if !is_valid {
        return Err(AppError::AuthError("invalid username or password".to_string()));
    }

    let token = sign_jwt(
        user.id,
        &user.username,
        &config.jwt_secret,
        config.jwt_expiration,
    )?;

    Ok(Json(json!({
        "token": token,
        "type": "Bearer",
        "username": user.username,
    })))
}

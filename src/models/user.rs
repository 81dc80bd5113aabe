// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique username.
    pub username: String,

    /// Optional display name.
    pub name: Option<String>,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password_hash: String,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for a new user (Registration).
///
/// Required fields are `Option` so a missing field surfaces as a 400
/// validation error instead of a body-deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        required(message = "username is required"),
        length(min = 3, max = 50, message = "username must be at least 3 characters")
    )]
    pub username: Option<String>,

    pub name: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(min = 3, max = 128, message = "password must be at least 3 characters")
    )]
    pub password: Option<String>,
}

/// DTO for user login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// A user together with the ids of the blogs they own.
/// The blog list is derived from blog ownership, never stored separately.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    pub blogs: Vec<i64>,
}

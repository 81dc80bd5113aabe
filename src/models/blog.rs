use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'blogs' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating or fully replacing a blog.
///
/// Required fields are `Option` so a missing field surfaces as a 400
/// validation error instead of a body-deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct BlogPayload {
    #[validate(
        required(message = "title is required"),
        length(min = 1, max = 200, message = "title must not be empty")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "author is required"),
        length(min = 1, max = 100, message = "author must not be empty")
    )]
    pub author: Option<String>,

    #[validate(
        required(message = "url is required"),
        length(min = 1, max = 500, message = "url must not be empty")
    )]
    pub url: Option<String>,

    /// Defaults to 0 when absent.
    #[validate(range(min = 0, message = "likes must be non-negative"))]
    pub likes: Option<i64>,
}

/// Restricted view of a blog's owner embedded in responses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserRef {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
}

/// A blog shaped for API responses: owner view embedded, comments in
/// insertion order.
#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: UserRef,
    pub comments: Vec<String>,
}

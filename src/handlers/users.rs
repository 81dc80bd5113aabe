use std::collections::HashMap;

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{error::AppError, models::user::UserResponse};

/// List all users with the ids of the blogs they own.
///
/// The blog list is derived from `blogs.user_id` on the fly; there is no
/// stored back-reference to drift out of sync with actual ownership.
pub async fn list_users(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let users = sqlx::query_as::<_, (i64, String, Option<String>)>(
        "SELECT id, username, name FROM users ORDER BY id",
    )
    .fetch_all(&pool)
    .await?;

    let ownership = sqlx::query_as::<_, (i64, i64)>("SELECT user_id, id FROM blogs ORDER BY id")
        .fetch_all(&pool)
        .await?;

    let mut blogs_by_user: HashMap<i64, Vec<i64>> = HashMap::new();
    for (user_id, blog_id) in ownership {
        blogs_by_user.entry(user_id).or_default().push(blog_id);
    }

    let shaped: Vec<UserResponse> = users
        .into_iter()
        .map(|(id, username, name)| UserResponse {
            id,
            username,
            name,
            blogs: blogs_by_user.remove(&id).unwrap_or_default(),
        })
        .collect();

    Ok(Json(shaped))
}

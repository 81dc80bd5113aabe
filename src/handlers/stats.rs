use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{error::AppError, models::blog::Blog, stats};

/// Report aggregate statistics over all stored blogs.
///
/// Materializes the blog list once and hands it to the pure aggregation
/// module. Aggregates with no defined answer over an empty list serialize
/// as null.
pub async fn get_stats(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let blogs = sqlx::query_as::<_, Blog>(
        "SELECT id, user_id, title, author, url, likes, created_at FROM blogs ORDER BY id",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(serde_json::json!({
        "blogs": stats::count_blogs(&blogs),
        "totalLikes": stats::total_likes(&blogs),
        "favorite": stats::favorite_blog(&blogs),
        "mostBlogs": stats::most_blogs(&blogs),
        "mostLikes": stats::most_likes(&blogs),
    })))
}

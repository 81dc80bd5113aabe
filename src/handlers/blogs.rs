use std::collections::HashMap;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        blog::{Blog, BlogPayload, BlogResponse, UserRef},
        comment::CreateCommentRequest,
    },
    utils::jwt::Claims,
};

const NOT_CREATOR: &str = "expected `logged user` to be creator of blog";

/// List all blogs, each with its owner view and ordered comments.
pub async fn list_blogs(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let blogs = sqlx::query_as::<_, Blog>(
        "SELECT id, user_id, title, author, url, likes, created_at FROM blogs ORDER BY id",
    )
    .fetch_all(&pool)
    .await?;

    let users = sqlx::query_as::<_, UserRef>("SELECT id, username, name FROM users")
        .fetch_all(&pool)
        .await?;
    let users: HashMap<i64, UserRef> = users.into_iter().map(|u| (u.id, u)).collect();

    // One pass over all comments instead of a query per blog.
    let comment_rows =
        sqlx::query_as::<_, (i64, String)>("SELECT blog_id, content FROM comments ORDER BY id")
            .fetch_all(&pool)
            .await?;
    let mut comments: HashMap<i64, Vec<String>> = HashMap::new();
    for (blog_id, content) in comment_rows {
        comments.entry(blog_id).or_default().push(content);
    }

    let shaped = blogs
        .into_iter()
        .map(|blog| {
            let user = users.get(&blog.user_id).cloned().ok_or_else(|| {
                AppError::InternalServerError(format!("blog {} has no owner row", blog.id))
            })?;
            Ok(BlogResponse {
                id: blog.id,
                title: blog.title,
                author: blog.author,
                url: blog.url,
                likes: blog.likes,
                user,
                comments: comments.remove(&blog.id).unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(Json(shaped))
}

/// Get a single blog by ID.
pub async fn get_blog(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let blog = fetch_blog(&pool, id)
        .await?
        .ok_or(AppError::NotFound("blog not found".to_string()))?;

    Ok(Json(shape_blog(&pool, blog).await?))
}

/// Create a new blog. Requires authentication; the caller becomes the owner.
/// Missing likes default to 0.
pub async fn create_blog(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<BlogPayload>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Validate payload
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user_id = claims.user_id()?;

    // 2. The token must name an existing user
    let owner = sqlx::query_as::<_, UserRef>("SELECT id, username, name FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::BadRequest("invalid user".to_string()))?;

    let (Some(title), Some(author), Some(url)) = (payload.title, payload.author, payload.url)
    else {
        return Err(AppError::BadRequest("title, author and url are required".to_string()));
    };
    let likes = payload.likes.unwrap_or(0);

    // 3. Insert blog
    let blog = sqlx::query_as::<_, Blog>(
        r#"
        INSERT INTO blogs (user_id, title, author, url, likes, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, user_id, title, author, url, likes, created_at
        "#,
    )
    .bind(user_id)
    .bind(&title)
    .bind(&author)
    .bind(&url)
    .bind(likes)
    .bind(chrono::Utc::now())
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create blog: {:?}", e);
        AppError::from(e)
    })?;

    let response = BlogResponse {
        id: blog.id,
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
        user: owner,
        comments: Vec::new(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Append a comment to a blog. Comments are opaque strings kept in
/// insertion order.
pub async fn add_comment(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    let Some(comment) = payload.comment else {
        return Err(AppError::BadRequest("comment is required".to_string()));
    };

    let blog = fetch_blog(&pool, id)
        .await?
        .ok_or(AppError::NotFound("blog not found".to_string()))?;

    sqlx::query("INSERT INTO comments (blog_id, content, created_at) VALUES (?, ?, ?)")
        .bind(blog.id)
        .bind(&comment)
        .bind(chrono::Utc::now())
        .execute(&pool)
        .await?;

    Ok((StatusCode::CREATED, Json(shape_blog(&pool, blog).await?)))
}

/// Replace a blog's fields. Requires authentication and ownership,
/// mirroring delete. The owner and comments are not replaceable.
pub async fn update_blog(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<BlogPayload>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user_id = claims.user_id()?;

    let blog = fetch_blog(&pool, id)
        .await?
        .ok_or(AppError::NotFound("blog not found".to_string()))?;

    if blog.user_id != user_id {
        return Err(AppError::AuthError(NOT_CREATOR.to_string()));
    }

    let (Some(title), Some(author), Some(url)) = (payload.title, payload.author, payload.url)
    else {
        return Err(AppError::BadRequest("title, author and url are required".to_string()));
    };
    let likes = payload.likes.unwrap_or(0);

    let updated = sqlx::query_as::<_, Blog>(
        r#"
        UPDATE blogs
        SET title = ?, author = ?, url = ?, likes = ?
        WHERE id = ?
        RETURNING id, user_id, title, author, url, likes, created_at
        "#,
    )
    .bind(&title)
    .bind(&author)
    .bind(&url)
    .bind(likes)
    .bind(blog.id)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(shape_blog(&pool, updated).await?)))
}

/// Delete a blog. Requires authentication; only the creator may delete.
/// The blog and its comments go in a single transaction, so the owner's
/// derived blog list can never reference a deleted blog.
pub async fn delete_blog(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    // 1. Fetch blog to check ownership
    let blog = fetch_blog(&pool, id)
        .await?
        .ok_or(AppError::NotFound("blog not found".to_string()))?;

    // 2. Check permission
    if blog.user_id != user_id {
        return Err(AppError::AuthError(NOT_CREATOR.to_string()));
    }

    // 3. Delete comments and blog atomically
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM comments WHERE blog_id = ?")
        .bind(blog.id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM blogs WHERE id = ?")
        .bind(blog.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn fetch_blog(pool: &SqlitePool, id: i64) -> Result<Option<Blog>, AppError> {
    let blog = sqlx::query_as::<_, Blog>(
        "SELECT id, user_id, title, author, url, likes, created_at FROM blogs WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(blog)
}

/// Shape a blog for a response: embed the restricted owner view and the
/// blog's comments in insertion order.
async fn shape_blog(pool: &SqlitePool, blog: Blog) -> Result<BlogResponse, AppError> {
    let user = sqlx::query_as::<_, UserRef>("SELECT id, username, name FROM users WHERE id = ?")
        .bind(blog.user_id)
        .fetch_one(pool)
        .await?;

    let comments =
        sqlx::query_scalar::<_, String>("SELECT content FROM comments WHERE blog_id = ? ORDER BY id")
            .bind(blog.id)
            .fetch_all(pool)
            .await?;

    Ok(BlogResponse {
        id: blog.id,
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
        user,
        comments,
    })
}

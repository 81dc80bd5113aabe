// src/routes.rs

use axum::{
    Router,
    http::Method,
    middleware,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{auth, blogs, stats, users},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, blogs, users, stats).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let blog_routes = Router::new()
        .route("/", get(blogs::list_blogs))
        .route("/{id}", get(blogs::get_blog))
        .route("/{id}/comments", post(blogs::add_comment))
        // Mutations require a valid bearer token; the middleware rejects
        // with 401 before any handler runs.
        .merge(
            Router::new()
                .route("/", post(blogs::create_blog))
                .route(
                    "/{id}",
                    put(blogs::update_blog).delete(blogs::delete_blog),
                )
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/blogs", blog_routes)
        .route("/api/users", get(users::list_users))
        .route("/api/stats", get(stats::get_stats))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

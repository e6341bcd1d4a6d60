//! Gazette server library logic.

pub mod api;
pub mod api_articles;
pub mod api_comments;
pub mod api_topics;
pub mod api_users;
pub mod config;
pub mod error;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get};
use axum::{Extension, Router};
use gazette_db::DbPool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
///
/// The pool lives here, scoped to the router built from it; there is no
/// module-level database state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
}

/// Maximum request body size (64 KiB). Comment and vote payloads are tiny.
const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Parses a path id segment. Any token that is not a plain integer is
/// invalid input.
pub(crate) fn parse_id(raw: &str) -> Result<i64, error::ApiError> {
    raw.parse::<i64>().map_err(|_| error::ApiError::InvalidInput)
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health_handler))
        .route("/api", get(api::describe_endpoints_handler))
        .route("/api/topics", get(api_topics::list_topics_handler))
        .route("/api/articles", get(api_articles::list_articles_handler))
        .route(
            "/api/articles/{articleId}",
            get(api_articles::get_article_handler)
                .patch(api_articles::update_article_votes_handler),
        )
        .route(
            "/api/articles/{articleId}/comments",
            get(api_comments::list_comments_handler).post(api_comments::create_comment_handler),
        )
        .route(
            "/api/comments/{commentId}",
            delete(api_comments::delete_comment_handler),
        )
        .route("/api/users", get(api_users::list_users_handler))
        .fallback(error::route_not_found_handler)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-1").unwrap(), -1);
        assert!(parse_id("one-hundred").is_err());
        assert!(parse_id("4.2").is_err());
        assert!(parse_id("").is_err());
    }
}

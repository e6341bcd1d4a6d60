//! Comment endpoints: listing per article, creation, deletion.

use crate::error::ApiError;
use crate::{parse_id, AppState};
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use gazette_content::comments;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

/// GET /api/articles/:article_id/comments
pub async fn list_comments_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(article_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let article_id = parse_id(&article_id)?;

    let comments = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::internal)?;
        comments::list_for_article(&conn, article_id).map_err(ApiError::from)
    })
    .await
    .map_err(ApiError::internal)??;

    Ok(Json(json!({ "comments": comments })))
}

/// POST /api/articles/:article_id/comments
///
/// Both `username` and `body` are required; an unknown username surfaces
/// from storage as a foreign-key failure and is translated to a 404.
pub async fn create_comment_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(article_id): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let article_id = parse_id(&article_id)?;
    let (username, body) = match (payload.username, payload.body) {
        (Some(username), Some(body)) => (username, body),
        _ => return Err(ApiError::MissingFields),
    };

    let comment = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::internal)?;
        comments::create_comment(&conn, article_id, &username, &body).map_err(ApiError::from)
    })
    .await
    .map_err(ApiError::internal)??;

    Ok((StatusCode::CREATED, Json(json!({ "comment": comment }))))
}

/// DELETE /api/comments/:comment_id
pub async fn delete_comment_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let comment_id = parse_id(&comment_id)?;

    tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::internal)?;
        comments::delete_comment(&conn, comment_id).map_err(ApiError::from)
    })
    .await
    .map_err(ApiError::internal)??;

    Ok(StatusCode::NO_CONTENT)
}

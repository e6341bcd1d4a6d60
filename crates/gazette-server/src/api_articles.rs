//! Article endpoints: listing with sort/filter, retrieval, vote updates.

use crate::error::ApiError;
use crate::{parse_id, AppState};
use axum::extract::{Extension, Path, Query};
use axum::Json;
use gazette_content::articles::{self, SortColumn, SortOrder};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ListArticlesParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
}

/// GET /api/articles
///
/// `sort_by` and `order` are validated against their allow-lists before any
/// SQL runs; an unknown topic is a 404.
pub async fn list_articles_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ListArticlesParams>,
) -> Result<Json<Value>, ApiError> {
    let sort = match params.sort_by.as_deref() {
        Some(raw) => raw.parse::<SortColumn>()?,
        None => SortColumn::default(),
    };
    let order = match params.order.as_deref() {
        Some(raw) => raw.parse::<SortOrder>()?,
        None => SortOrder::default(),
    };

    let articles = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::internal)?;
        articles::list_articles(&conn, sort, order, params.topic.as_deref())
            .map_err(ApiError::from)
    })
    .await
    .map_err(ApiError::internal)??;

    Ok(Json(json!({ "articles": articles })))
}

/// GET /api/articles/:article_id
pub async fn get_article_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(article_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let article_id = parse_id(&article_id)?;

    let article = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::internal)?;
        articles::get_article(&conn, article_id).map_err(ApiError::from)
    })
    .await
    .map_err(ApiError::internal)??;

    Ok(Json(json!({ "article": article })))
}

/// PATCH /api/articles/:article_id
///
/// The body is read as raw JSON; an absent or non-numeric `inc_votes` is
/// invalid input, the same 400 contract as a malformed id.
pub async fn update_article_votes_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(article_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let article_id = parse_id(&article_id)?;
    let inc_votes = payload
        .get("inc_votes")
        .and_then(Value::as_i64)
        .ok_or(ApiError::InvalidInput)?;

    let article = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::internal)?;
        articles::adjust_votes(&conn, article_id, inc_votes).map_err(ApiError::from)
    })
    .await
    .map_err(ApiError::internal)??;

    Ok(Json(json!({ "article": article })))
}

//! Topic endpoints.

use crate::error::ApiError;
use crate::AppState;
use axum::extract::Extension;
use axum::Json;
use gazette_content::topics::{self, Topic};
use std::sync::Arc;

/// GET /api/topics
pub async fn list_topics_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Topic>>, ApiError> {
    let topics = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::internal)?;
        topics::list_topics(&conn).map_err(ApiError::from)
    })
    .await
    .map_err(ApiError::internal)??;

    Ok(Json(topics))
}

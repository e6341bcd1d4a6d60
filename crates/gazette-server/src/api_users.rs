//! User endpoints.

use crate::error::ApiError;
use crate::AppState;
use axum::extract::Extension;
use axum::Json;
use gazette_content::users;
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /api/users
pub async fn list_users_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let users = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get().map_err(ApiError::internal)?;
        users::list_users(&conn).map_err(ApiError::from)
    })
    .await
    .map_err(ApiError::internal)??;

    Ok(Json(json!({ "users": users })))
}

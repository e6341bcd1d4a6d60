//! Service-level handlers: liveness and API self-description.

use crate::error::ApiError;
use axum::Json;
use serde_json::{json, Value};

/// The endpoint catalog served at `GET /api`, embedded at compile time so
/// the documentation ships with the binary.
const ENDPOINTS_JSON: &str = include_str!("endpoints.json");

/// Health check handler.
///
/// Returns `200 OK` with server status and version. Used by load balancers,
/// monitoring, and CI to verify the server is running.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handler for `GET /api`: the catalog of available endpoints.
pub async fn describe_endpoints_handler() -> Result<Json<Value>, ApiError> {
    let catalog: Value = serde_json::from_str(ENDPOINTS_JSON).map_err(ApiError::internal)?;
    Ok(Json(catalog))
}

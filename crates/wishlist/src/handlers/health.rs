//! Health check endpoints.
//!
//! - `/` - Service status (`{"status": "ok"}`)
//! - `/livez` - Basic liveness probe (immediate 200, no checks)

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// GET / - Service status.
pub async fn status() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately without touching the storage backend.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Never touches storage.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

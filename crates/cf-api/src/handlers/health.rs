use axum::Json;
use serde_json::json;

/// Static liveness acknowledgment; the service holds no connections or
/// state to probe.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

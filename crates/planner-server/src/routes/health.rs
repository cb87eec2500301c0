use axum::Json;

/// GET / — liveness probe.
pub async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "FastAPI is running successfully!" }))
}

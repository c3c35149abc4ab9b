use axum::Json;

// GET /
pub async fn root() -> &'static str {
    "Booking API running!"
}

// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

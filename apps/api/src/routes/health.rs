use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /
/// Static greeting with service status and version.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "HireHelp API Server",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health
/// Liveness probe with the current timestamp.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

//! Service index, health check and fallback

use axum::Json;
use shared::error::{AppError, ErrorCode};

pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "folio-server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "projects": "/api/projects",
            "content": "/api/content/{slug}",
            "menu": "/api/navigation/menu",
            "footer": "/api/navigation/footer",
        },
    }))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "folio-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn not_found() -> AppError {
    AppError::with_message(ErrorCode::NotFound, "Route not found")
}

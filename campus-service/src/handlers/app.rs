use crate::models::iso_timestamp;
use crate::startup::AppState;
use axum::{
    extract::{OriginalUri, State},
    http::Method,
    response::IntoResponse,
    Json,
};
use chrono::{Local, Utc};
use serde_json::json;
use service_core::error::AppError;

/// Liveness plus endpoint discovery.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "🎉 CampusGPT Backend API is LIVE!",
        "status": "Operational",
        "ai_ready": state.assistant.is_ready(),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": iso_timestamp(Utc::now()),
        "endpoints": {
            "GET /": "Server status",
            "GET /api/health": "Health check",
            "POST /api/chat": "AI Chat endpoint",
            "POST /api/upload-pdf": "PDF upload",
            "GET /api/timetable": "Class schedules",
            "GET /api/contacts": "Faculty contacts",
            "GET /api/locations": "Campus locations"
        }
    }))
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let ai_status = if state.assistant.is_ready() {
        "Connected"
    } else {
        "Not Configured"
    };

    Json(json!({
        "success": true,
        "status": "Healthy",
        "service": "campus-service",
        "server_time": Local::now().format("%-I:%M:%S %p").to_string(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
        "ai_status": ai_status
    }))
}

pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    tracing::debug!(%method, %path, "Route not found");

    AppError::NotFound {
        path,
        method: method.to_string(),
    }
}
